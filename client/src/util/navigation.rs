//! Page navigation capability.

/// Moves the browser to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// [`Navigator`] that performs a full page load via `window.location`.
///
/// The login route is served outside this app, so client-side routing cannot
/// reach it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl Navigator for BrowserLocation {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
