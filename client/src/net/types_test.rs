use super::*;

// =============================================================
// NicknameCheckResponse
// =============================================================

fn taken(raw: &str) -> bool {
    serde_json::from_str::<NicknameCheckResponse>(raw).unwrap().is_taken()
}

#[test]
fn nickname_check_response_reads_exists() {
    assert!(taken(r#"{"exists":true}"#));
    assert!(!taken(r#"{"exists":false}"#));
}

#[test]
fn nickname_check_response_missing_exists_is_available() {
    assert!(!taken("{}"));
}

#[test]
fn nickname_check_response_null_exists_is_available() {
    assert!(!taken(r#"{"exists":null}"#));
}

#[test]
fn nickname_check_response_numeric_exists_follows_truthiness() {
    assert!(taken(r#"{"exists":1}"#));
    assert!(!taken(r#"{"exists":0}"#));
    assert!(!taken(r#"{"exists":0.0}"#));
}

#[test]
fn nickname_check_response_string_and_container_exists() {
    assert!(!taken(r#"{"exists":""}"#));
    assert!(taken(r#"{"exists":"yes"}"#));
    assert!(taken(r#"{"exists":[]}"#));
    assert!(taken(r#"{"exists":{}}"#));
}

// =============================================================
// CreateUserRequest
// =============================================================

#[test]
fn create_user_request_uses_backend_field_names() {
    let req = CreateUserRequest {
        username: "alice".to_owned(),
        nickname: "bob".to_owned(),
        email: "a@x.com".to_owned(),
        password: "pw1".to_owned(),
        password_confirm: "pw1".to_owned(),
        birth_date: "2000-01-01".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "username": "alice",
            "nickname": "bob",
            "email": "a@x.com",
            "password": "pw1",
            "password_confirm": "pw1",
            "birth_date": "2000-01-01",
        })
    );
}

// =============================================================
// ErrorBody::detail_message
// =============================================================

fn parse(raw: &str) -> ErrorBody {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn detail_list_joins_messages() {
    let body = parse(r#"{"detail":[{"msg":"email invalid"},{"msg":"too short"}]}"#);
    assert_eq!(body.detail_message().as_deref(), Some("email invalid, too short"));
}

#[test]
fn detail_list_ignores_extra_item_fields() {
    let body = parse(r#"{"detail":[{"loc":["body","email"],"msg":"bad","type":"value_error"}]}"#);
    assert_eq!(body.detail_message().as_deref(), Some("bad"));
}

#[test]
fn detail_string_is_used_verbatim() {
    let body = parse(r#"{"detail":"Username already registered"}"#);
    assert_eq!(body.detail_message().as_deref(), Some("Username already registered"));
}

#[test]
fn detail_empty_string_has_no_message() {
    assert_eq!(parse(r#"{"detail":""}"#).detail_message(), None);
}

#[test]
fn detail_missing_or_null_has_no_message() {
    assert_eq!(parse("{}").detail_message(), None);
    assert_eq!(parse(r#"{"detail":null}"#).detail_message(), None);
}

#[test]
fn detail_other_shape_has_no_message() {
    let body = parse(r#"{"detail":{"code":42}}"#);
    assert!(matches!(body.detail, Some(ErrorDetail::Other(_))));
    assert_eq!(body.detail_message(), None);
}
