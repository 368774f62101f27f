use super::*;
use crate::net::types::ErrorDetail;

#[test]
fn check_nickname_url_formats_expected_path() {
    assert_eq!(
        check_nickname_url("http://localhost:8000", "bob"),
        "http://localhost:8000/users/check-nickname?nickname=bob"
    );
}

#[test]
fn check_nickname_url_does_not_escape_value() {
    assert_eq!(
        check_nickname_url("http://h", "a b&c=d"),
        "http://h/users/check-nickname?nickname=a b&c=d"
    );
}

#[test]
fn users_url_formats_expected_path() {
    assert_eq!(users_url("http://localhost:8000"), "http://localhost:8000/users");
}

#[test]
fn http_users_api_takes_base_url_from_config() {
    let config = ApiConfig::with_base_url(Some("https://api.example.com/"));
    let api = HttpUsersApi::new(&config);
    assert_eq!(api.base_url, "https://api.example.com");
}

#[test]
fn parse_error_body_reads_detail() {
    let body = parse_error_body(r#"{"detail":"nope"}"#).unwrap();
    assert_eq!(body.detail, Some(ErrorDetail::Message("nope".to_owned())));
}

#[test]
fn parse_error_body_rejects_non_json() {
    assert_eq!(parse_error_body("<html>502 Bad Gateway</html>"), None);
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_side_calls_are_unavailable() {
    let api = HttpUsersApi::new(&ApiConfig::default());
    assert_eq!(api.check_nickname("bob").await, Err(ApiError::Unavailable));
}

#[test]
fn encode_error_is_not_a_network_failure() {
    let err = encode_error("key must be a string");
    assert_eq!(err, ApiError::Encode("key must be a string".to_owned()));
    assert_eq!(err.to_string(), "request body encode failed: key must be a string");
}
