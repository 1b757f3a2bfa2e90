use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_empty_is_required() {
    assert_eq!(email_problem(""), Some("Email is required"));
    assert_eq!(email_problem("   "), Some("Email is required"));
}

#[test]
fn email_accepts_ordinary_addresses() {
    assert_eq!(email_problem("john.doe@example.com"), None);
    assert_eq!(email_problem("a@b.co"), None);
}

#[test]
fn email_rejects_missing_at_or_tld() {
    assert!(email_problem("no-at-sign").is_some());
    assert!(email_problem("user@domain").is_some());
    assert!(email_problem("@example.com").is_some());
    assert!(email_problem("user@").is_some());
}

#[test]
fn email_rejects_whitespace_and_double_at() {
    assert!(email_problem("user name@example.com").is_some());
    assert!(email_problem("user@ex@ample.com").is_some());
}

#[test]
fn email_rejects_dot_at_domain_edge() {
    assert!(email_problem("user@.example.com").is_some());
    assert!(email_problem("user@example.com.").is_some());
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_empty_is_required() {
    assert_eq!(password_problem(""), Some("Please enter your password"));
}

#[test]
fn password_too_short() {
    assert_eq!(password_problem("Ab1!"), Some("Password must be at least 8 characters"));
}

#[test]
fn password_needs_every_class() {
    // Missing special character.
    assert!(password_problem("Abcdefg1").is_some());
    // Missing digit.
    assert!(password_problem("Abcdefg!").is_some());
    // Missing uppercase.
    assert!(password_problem("abcdefg1!").is_some());
    // Missing lowercase.
    assert!(password_problem("ABCDEFG1!").is_some());
}

#[test]
fn password_accepts_all_classes() {
    assert_eq!(password_problem("Honk!ng2024"), None);
}
