//! Errors produced by users-API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed: status {status}")]
    Status { status: u16, body: Option<ErrorBody> },

    /// The request body could not be serialized; nothing was sent.
    #[error("request body encode failed: {0}")]
    Encode(String),

    /// A 2xx body could not be decoded.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The call was made outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message extracted from the backend's `detail` field, when the error
    /// carries one.
    #[must_use]
    pub fn detail_message(&self) -> Option<String> {
        match self {
            Self::Status { body: Some(body), .. } => body.detail_message(),
            _ => None,
        }
    }
}
