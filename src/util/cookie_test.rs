use super::*;

#[test]
fn value_from_jar_single_cookie() {
    assert_eq!(value_from_jar("csrf_refresh_token=abc123", "csrf_refresh_token"), Some("abc123".to_owned()));
}

#[test]
fn value_from_jar_picks_from_many() {
    let jar = "theme=dark; csrf_refresh_token=tok-9; lang=en";
    assert_eq!(value_from_jar(jar, "csrf_refresh_token"), Some("tok-9".to_owned()));
    assert_eq!(value_from_jar(jar, "lang"), Some("en".to_owned()));
}

#[test]
fn value_from_jar_requires_exact_name() {
    // A name that prefixes another must not match it.
    let jar = "csrf=short; csrf_refresh_token=long";
    assert_eq!(value_from_jar(jar, "csrf"), Some("short".to_owned()));
    assert_eq!(value_from_jar(jar, "csrf_refresh"), None);
}

#[test]
fn value_from_jar_missing_cookie() {
    assert_eq!(value_from_jar("a=1; b=2", "c"), None);
    assert_eq!(value_from_jar("", "a"), None);
}

#[test]
fn value_from_jar_empty_value() {
    assert_eq!(value_from_jar("flag=; other=x", "flag"), Some(String::new()));
}

#[test]
fn value_from_jar_preserves_equals_in_value() {
    // Cookie values may themselves contain `=` (e.g. base64 padding).
    assert_eq!(value_from_jar("t=a=b=c", "t"), Some("a=b=c".to_owned()));
}
