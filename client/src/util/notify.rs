//! Blocking user notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signup flow reports every outcome through a modal alert the user must
//! dismiss. Keeping it behind a trait lets flow tests record messages instead.

/// Shows a message the user has to acknowledge.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// [`Notifier`] backed by `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("alert: {message}");
        }
    }
}
