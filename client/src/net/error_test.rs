use super::*;
use crate::net::types::{ErrorDetail, ValidationItem};

#[test]
fn status_error_exposes_detail_message() {
    let err = ApiError::Status {
        status: 422,
        body: Some(ErrorBody {
            detail: Some(ErrorDetail::Items(vec![
                ValidationItem { msg: "email invalid".to_owned() },
                ValidationItem { msg: "too short".to_owned() },
            ])),
        }),
    };
    assert_eq!(err.detail_message().as_deref(), Some("email invalid, too short"));
}

#[test]
fn status_error_without_body_has_no_detail() {
    let err = ApiError::Status { status: 500, body: None };
    assert_eq!(err.detail_message(), None);
}

#[test]
fn network_error_has_no_detail() {
    assert_eq!(ApiError::Network("offline".to_owned()).detail_message(), None);
}

#[test]
fn display_formats_status() {
    let err = ApiError::Status { status: 409, body: None };
    assert_eq!(err.to_string(), "request failed: status 409");
}
