//! Form validation for the create-link flow.
//!
//! All checks are pure and synchronous; nothing here touches the network.
//! Custom-code uniqueness is a submission-time error returned by the backend.

use crate::error::ValidationErrors;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Compiled charset for user-chosen short codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

const CUSTOM_CODE_MIN_LEN: usize = 3;
const CUSTOM_CODE_MAX_LEN: usize = 20;

/// True iff `input` parses as an absolute URL with an authority.
///
/// Scheme-only or authority-less forms (`mailto:`, relative paths) fail; no
/// network or DNS resolution is performed.
pub fn is_valid_absolute_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// Prefixes `https://` unless the input already carries an HTTP(S) scheme.
///
/// Applied before validation and before submission, so users may omit the
/// scheme entirely.
pub fn with_assumed_protocol(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Validates a user-chosen short code.
///
/// An empty code is valid: the field is optional and the backend assigns one.
/// Non-empty codes must pass, in order: minimum length, maximum length,
/// charset. The first failing rule determines the message.
///
/// # Errors
///
/// Returns the human-readable message for the first violated rule.
pub fn validate_custom_code(code: &str) -> Result<(), String> {
    if code.is_empty() {
        return Ok(());
    }

    if code.len() < CUSTOM_CODE_MIN_LEN {
        return Err(format!(
            "Custom code must be at least {CUSTOM_CODE_MIN_LEN} characters long"
        ));
    }

    if code.len() > CUSTOM_CODE_MAX_LEN {
        return Err(format!(
            "Custom code must be no more than {CUSTOM_CODE_MAX_LEN} characters long"
        ));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err("Custom code can only contain letters, numbers, and hyphens".to_string());
    }

    Ok(())
}

/// Validates both form fields independently and returns the union of errors.
///
/// Submission proceeds only when the result [is empty](ValidationErrors::is_empty).
pub fn validate_form(url: &str, custom_code: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let trimmed = url.trim();
    if trimmed.is_empty() {
        errors.url = Some("URL is required".to_string());
    } else if !is_valid_absolute_url(&with_assumed_protocol(trimmed)) {
        errors.url = Some("Please enter a valid URL".to_string());
    }

    errors.custom_code = validate_custom_code(custom_code.trim()).err();

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_valid() {
        assert!(is_valid_absolute_url("https://example.com"));
        assert!(is_valid_absolute_url("http://example.com/a/b?q=1"));
    }

    #[test]
    fn relative_and_malformed_strings_are_invalid() {
        assert!(!is_valid_absolute_url("example.com"));
        assert!(!is_valid_absolute_url("/a/b"));
        assert!(!is_valid_absolute_url("not a url"));
        assert!(!is_valid_absolute_url(""));
    }

    #[test]
    fn urls_without_authority_are_invalid() {
        assert!(!is_valid_absolute_url("mailto:user@example.com"));
        assert!(!is_valid_absolute_url("https://"));
    }

    #[test]
    fn assumed_protocol_prefixes_https() {
        assert_eq!(
            with_assumed_protocol("example.com/a/b"),
            "https://example.com/a/b"
        );
    }

    #[test]
    fn existing_schemes_are_kept_unchanged() {
        assert_eq!(
            with_assumed_protocol("http://example.com"),
            "http://example.com"
        );
        assert_eq!(
            with_assumed_protocol("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn empty_custom_code_is_valid() {
        assert!(validate_custom_code("").is_ok());
    }

    #[test]
    fn short_custom_code_reports_minimum_length() {
        let err = validate_custom_code("ab").unwrap_err();
        assert_eq!(err, "Custom code must be at least 3 characters long");
    }

    #[test]
    fn long_custom_code_reports_maximum_length() {
        let err = validate_custom_code(&"a".repeat(21)).unwrap_err();
        assert_eq!(err, "Custom code must be no more than 20 characters long");
    }

    #[test]
    fn underscore_is_not_permitted() {
        let err = validate_custom_code("my_code").unwrap_err();
        assert_eq!(
            err,
            "Custom code can only contain letters, numbers, and hyphens"
        );
    }

    #[test]
    fn hyphenated_alphanumeric_codes_are_valid() {
        assert!(validate_custom_code("my-code1").is_ok());
        assert!(validate_custom_code("ABC-123").is_ok());
    }

    #[test]
    fn length_rule_wins_over_charset_rule() {
        // "a_" violates both length and charset; length is checked first.
        let err = validate_custom_code("a_").unwrap_err();
        assert!(err.contains("at least 3 characters"));
    }

    #[test]
    fn form_errors_are_the_union_of_field_errors() {
        let errors = validate_form("", "x");
        assert_eq!(errors.url.as_deref(), Some("URL is required"));
        assert!(errors.custom_code.is_some());
    }

    #[test]
    fn form_accepts_scheme_less_url_with_empty_code() {
        let errors = validate_form("example.com/a/b", "");
        assert!(errors.is_empty());
    }

    #[test]
    fn whitespace_only_url_is_required() {
        let errors = validate_form("   ", "");
        assert_eq!(errors.url.as_deref(), Some("URL is required"));
    }
}
