//! Wire DTOs for the users backend.
//!
//! DESIGN
//! ======
//! Request bodies serialize to the backend's snake_case schema; response
//! bodies are decoded leniently (`#[serde(default)]`) because only one or two
//! fields of each payload drive UI behavior.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /users/check-nickname`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameCheckResponse {
    /// Truthy when another account already uses the nickname. Kept as raw
    /// JSON so `null`, `0` or `1` from looser backends still decode.
    #[serde(default)]
    pub exists: Option<serde_json::Value>,
}

impl NicknameCheckResponse {
    /// `exists` under JavaScript truthiness: `null`, `false`, `0` and `""`
    /// mean available; any other value, including `[]` and `{}`, means taken.
    #[must_use]
    pub fn is_taken(&self) -> bool {
        match &self.exists {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Array(_) | serde_json::Value::Object(_)) => true,
        }
    }
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub password: String,
    /// Copy of `password` for the backend's confirmation validator.
    pub password_confirm: String,
    /// Raw `YYYY-MM-DD` value of the date input.
    pub birth_date: String,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// The `detail` field: either a plain message or a list of field errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Items(Vec<ValidationItem>),
    /// Any other JSON shape; carries no usable message.
    Other(serde_json::Value),
}

/// One field-level validation error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationItem {
    #[serde(default)]
    pub msg: String,
}

impl ErrorBody {
    /// Human-readable message carried by `detail`, if any.
    ///
    /// A list joins every item's `msg` with `", "`. A string is used when
    /// non-empty. Anything else yields `None` so callers fall back to their
    /// own generic text.
    #[must_use]
    pub fn detail_message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            ErrorDetail::Items(items) => {
                Some(items.iter().map(|item| item.msg.as_str()).collect::<Vec<_>>().join(", "))
            }
            ErrorDetail::Message(message) if !message.is_empty() => Some(message.clone()),
            ErrorDetail::Message(_) | ErrorDetail::Other(_) => None,
        }
    }
}
