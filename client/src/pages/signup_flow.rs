//! Signup orchestration: nickname blur checks and guarded submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SignupPage` forwards DOM events here. The flow talks to the backend,
//! notification and navigation only through capability traits, and to page
//! state only through `SignupStore`, so the whole sequence runs in native
//! tests with fakes.
//!
//! CONCURRENCY
//! ===========
//! Each blur with a non-blank nickname issues its own request. Nothing is
//! cancelled or de-duplicated; whichever response arrives last decides the
//! final status.

#[cfg(test)]
#[path = "signup_flow_test.rs"]
mod signup_flow_test;

use leptos::prelude::*;

use crate::net::api::UsersApi;
use crate::net::error::ApiError;
use crate::state::signup::{SignupField, SignupState};
use crate::util::navigation::Navigator;
use crate::util::notify::Notifier;

pub const SIGNUP_SUCCEEDED: &str = "회원가입 완료!";
pub const SIGNUP_FAILED_FALLBACK: &str = "회원가입에 실패했습니다.";

/// Access to the page's `SignupState`. Both methods return `None` once the
/// backing storage is gone (e.g. the page was unmounted mid-request).
pub trait SignupStore {
    fn read_state<R>(&self, f: impl FnOnce(&SignupState) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut SignupState) -> R) -> Option<R>;
}

impl SignupStore for RwSignal<SignupState> {
    fn read_state<R>(&self, f: impl FnOnce(&SignupState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut SignupState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Notification text for a failed registration request.
#[must_use]
pub fn signup_failure_notice(err: &ApiError) -> String {
    let message = err.detail_message().unwrap_or_else(|| SIGNUP_FAILED_FALLBACK.to_owned());
    format!("회원가입 실패: {message}")
}

/// Signup event handlers over injected capabilities.
#[derive(Clone, Debug)]
pub struct SignupFlow<A, N, V> {
    api: A,
    notifier: N,
    navigator: V,
    login_path: String,
}

impl<A, N, V> SignupFlow<A, N, V>
where
    A: UsersApi,
    N: Notifier,
    V: Navigator,
{
    pub fn new(api: A, notifier: N, navigator: V, login_path: impl Into<String>) -> Self {
        Self { api, notifier, navigator, login_path: login_path.into() }
    }

    /// Keystroke in one of the form inputs.
    pub fn input<S: SignupStore>(&self, store: &S, field: SignupField, value: String) {
        store.update_state(|s| s.set_field(field, value));
    }

    /// Nickname input lost focus: verify availability unless blank.
    pub async fn nickname_blurred<S: SignupStore>(&self, store: &S) {
        let Some(nickname) = store.update_state(SignupState::begin_nickname_check).flatten() else {
            return;
        };
        let result = self.api.check_nickname(&nickname).await;
        if let Err(e) = &result {
            leptos::logging::warn!("nickname check failed: {e}");
        }
        store.update_state(|s| s.finish_nickname_check(&result));
    }

    /// Form submitted: run local guards, then register the account.
    pub async fn submit<S: SignupStore>(&self, store: &S) {
        let Some(submission) = store.read_state(SignupState::submission) else {
            return;
        };
        let request = match submission {
            Ok(request) => request,
            Err(rejection) => {
                self.notifier.notify(&rejection.to_string());
                return;
            }
        };

        match self.api.create_user(&request).await {
            Ok(()) => {
                self.notifier.notify(SIGNUP_SUCCEEDED);
                self.navigator.navigate(&self.login_path);
            }
            Err(e) => {
                leptos::logging::error!("signup failed: {e:?}");
                self.notifier.notify(&signup_failure_notice(&e));
            }
        }
    }
}
