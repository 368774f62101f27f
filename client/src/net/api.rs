//! REST API helpers for communicating with the users backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; non-2xx bodies are decoded
//! best-effort into [`ErrorBody`](super::types::ErrorBody) so the page can surface backend messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::CreateUserRequest;
#[cfg(feature = "hydrate")]
use super::types::NicknameCheckResponse;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::config::ApiConfig;

/// Users backend operations needed by the signup page.
///
/// Futures are `?Send`: the browser event loop is single-threaded and
/// `gloo-net` futures hold JS handles.
#[async_trait::async_trait(?Send)]
pub trait UsersApi {
    /// Ask whether `nickname` is already taken.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the backend answers with
    /// a non-2xx status, or the body is not JSON.
    async fn check_nickname(&self, nickname: &str) -> Result<bool, ApiError>;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects it.
    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), ApiError>;
}

/// Nickname check URL. The nickname is inserted as-is, without
/// percent-encoding.
#[cfg(any(test, feature = "hydrate"))]
fn check_nickname_url(base_url: &str, nickname: &str) -> String {
    format!("{base_url}/users/check-nickname?nickname={nickname}")
}

#[cfg(any(test, feature = "hydrate"))]
fn users_url(base_url: &str) -> String {
    format!("{base_url}/users")
}

/// Decode a non-2xx body into an [`ErrorBody`] if it is JSON.
#[cfg(any(test, feature = "hydrate"))]
fn parse_error_body(raw: &str) -> Option<ErrorBody> {
    serde_json::from_str(raw).ok()
}

/// Body serialization failed before any request left the browser.
#[cfg(any(test, feature = "hydrate"))]
fn encode_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Encode(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.ok().and_then(|raw| parse_error_body(&raw));
    ApiError::Status { status, body }
}

/// [`UsersApi`] over `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpUsersApi {
    base_url: String,
}

impl HttpUsersApi {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone() }
    }
}

#[async_trait::async_trait(?Send)]
impl UsersApi for HttpUsersApi {
    async fn check_nickname(&self, nickname: &str) -> Result<bool, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = check_nickname_url(&self.base_url, nickname);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            let body: NicknameCheckResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.is_taken())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, nickname);
            Err(ApiError::Unavailable)
        }
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = users_url(&self.base_url);
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(encode_error)?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, request);
            Err(ApiError::Unavailable)
        }
    }
}
