use super::*;

#[test]
fn server_message_prefers_msg_then_error() {
    assert_eq!(server_message(401, r#"{"msg":"m1","error":"m2"}"#), "m1");
    assert_eq!(server_message(500, r#"{"error":"m2"}"#), "m2");
}

#[test]
fn server_message_falls_back_to_status_text() {
    assert_eq!(server_message(502, "<html>bad gateway</html>"), "request failed with status 502");
    assert_eq!(server_message(500, ""), "request failed with status 500");
    assert_eq!(server_message(400, r#"{"detail":"other key"}"#), "request failed with status 400");
}

#[test]
fn status_and_not_found_accessors() {
    let err = ApiError::Status { status: 404, message: "User not found".to_owned() };
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.status(), None);
    assert!(!err.is_not_found());
}

#[test]
fn display_keeps_server_wording() {
    let err = ApiError::Status { status: 409, message: "Username already taken".to_owned() };
    assert_eq!(err.to_string(), "Username already taken");

    let err = ApiError::SessionExpired("request failed with status 401".to_owned());
    assert_eq!(err.to_string(), "session expired: request failed with status 401");
}
