//! Client-side form validation for the auth flow.
//!
//! Each check returns the user-facing problem message, or `None` when the
//! input is acceptable. The server applies its own validation regardless.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate an email address shape.
pub fn email_problem(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Email is required");
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid { None } else { Some("Please enter a valid email address") }
}

/// Validate the signup password rules: at least 8 characters with one
/// uppercase letter, one lowercase letter, one digit, and one special
/// character.
pub fn password_problem(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Please enter your password");
    }
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters");
    }
    let has_all_classes = password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric());
    if has_all_classes {
        None
    } else {
        Some("Password must include at least one of each: uppercase, lowercase, number, special character")
    }
}
