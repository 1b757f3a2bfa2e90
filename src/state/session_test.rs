use super::*;

/// Assemble a JWT-shaped token around the given claims payload.
fn token_with(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

fn session_with(claims: serde_json::Value) -> SessionState {
    let mut session = SessionState::default();
    session.set_access_token(Some(token_with(claims)));
    session
}

// =============================================================
// Token lifecycle
// =============================================================

#[test]
fn starts_signed_out() {
    let session = SessionState::default();
    assert_eq!(session.access_token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn set_and_clear_access_token() {
    let mut session = SessionState::default();
    session.set_access_token(Some("t1".to_owned()));
    assert_eq!(session.access_token(), Some("t1"));

    session.set_access_token(Some("t2".to_owned()));
    assert_eq!(session.access_token(), Some("t2"));

    session.clear_access_token();
    assert_eq!(session.access_token(), None);
}

// =============================================================
// Claim decoding
// =============================================================

#[test]
fn user_id_reads_the_sub_claim() {
    let session = session_with(serde_json::json!({"sub": "u-42", "username": "goosefan"}));
    assert_eq!(session.user_id(), Some("u-42".to_owned()));
}

#[test]
fn user_id_is_none_when_signed_out() {
    assert_eq!(SessionState::default().user_id(), None);
}

#[test]
fn malformed_token_reads_as_no_identity() {
    let mut session = SessionState::default();

    // Not base64url.
    session.set_access_token(Some("aaa.$$$.ccc".to_owned()));
    assert_eq!(session.user_id(), None);

    // Base64url but not JSON.
    let payload = URL_SAFE_NO_PAD.encode(b"not json");
    session.set_access_token(Some(format!("h.{payload}.s")));
    assert_eq!(session.user_id(), None);

    // No payload segment at all.
    session.set_access_token(Some("justonechunk".to_owned()));
    assert_eq!(session.user_id(), None);
}

#[test]
fn display_fallback_is_the_uppercased_initial() {
    let session = session_with(serde_json::json!({"sub": "u-1", "username": "goosefan"}));
    assert_eq!(session.display_fallback(), Some("G".to_owned()));
}

#[test]
fn display_fallback_requires_a_username_claim() {
    let session = session_with(serde_json::json!({"sub": "u-1"}));
    assert_eq!(session.display_fallback(), None);

    let session = session_with(serde_json::json!({"sub": "u-1", "username": "  "}));
    assert_eq!(session.display_fallback(), None);
}

#[test]
fn profile_picture_ref_reads_the_claim() {
    let session = session_with(serde_json::json!({"sub": "u-1", "profile_picture": "img-9"}));
    assert_eq!(session.profile_picture_ref(), Some("img-9".to_owned()));

    let session = session_with(serde_json::json!({"sub": "u-1"}));
    assert_eq!(session.profile_picture_ref(), None);
}

#[test]
fn claims_vanish_when_the_token_is_cleared() {
    let mut session = session_with(serde_json::json!({"sub": "u-42"}));
    assert!(session.user_id().is_some());
    session.clear_access_token();
    assert_eq!(session.user_id(), None);
}
