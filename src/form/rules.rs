//! Validation rules shared by the form field kinds.
//!
//! Each rule takes an already trimmed value and reports the first violated
//! constraint as a [`ValidationErrorCode`].

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::ValidationErrorCode;

/// Source of the email pattern, also sent to the client for pre-validation.
pub const EMAIL_PATTERN: &str = r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$";

/// Flags applied to [`EMAIL_PATTERN`], in JavaScript `RegExp` notation.
pub const EMAIL_FLAGS: &str = "i";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // ASCII-only folding, matching the JavaScript `i` flag
    RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        .unicode(false)
        .build()
        .ok()
});

// Integer part in group 1, fractional digits in group 2. ASCII digits only,
// since that is all `f64::from_str` accepts.
static NUMBER_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]+)(?:\.([0-9]+))?$").ok());

/// Returns `true` if `value` looks like an email address.
pub fn is_email_address(value: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

/// Returns `true` if `value` is a decimal number with at most `decimals`
/// fractional digits. `None` accepts any number of digits.
pub fn is_number(value: &str, decimals: Option<u32>) -> bool {
    let Some(captures) = NUMBER_REGEX.as_ref().and_then(|regex| regex.captures(value)) else {
        return false;
    };

    match (decimals, captures.get(2)) {
        (Some(max), Some(fraction)) => fraction.as_str().len() <= max as usize,
        _ => true,
    }
}

/// Length is checked before the format so an overlong address never reaches
/// the regex.
pub fn validate_email(
    value: &str,
    max_length: Option<usize>,
) -> Result<(), ValidationErrorCode> {
    if max_length.is_some_and(|max| value.chars().count() > max) {
        return Err(ValidationErrorCode::EmailTooLong);
    }

    if !is_email_address(value) {
        return Err(ValidationErrorCode::EmailInvalid);
    }

    Ok(())
}

pub fn validate_number(value: &str, decimals: Option<u32>) -> Result<(), ValidationErrorCode> {
    if !is_number(value, decimals) {
        return Err(ValidationErrorCode::NumberInvalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_common_addresses() {
        assert!(is_email_address("a@b.com"));
        assert!(is_email_address("First.Last+tag@Example.CO.uk"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_email_address(""));
        assert!(!is_email_address("no-at-sign.com"));
        assert!(!is_email_address("a@b"));
        assert!(!is_email_address("a b@c.com"));
        assert!(!is_email_address("a@-b.com"));
    }

    #[test]
    fn email_case_folding_stays_ascii() {
        assert!(is_email_address("A@B.COM"));
        // KELVIN SIGN and LONG S fold to k/s only under Unicode rules
        assert!(!is_email_address("\u{212A}@b.com"));
        assert!(!is_email_address("a@\u{17F}.com"));
    }

    #[test]
    fn email_too_long_wins_over_invalid() {
        let result = validate_email("not-an-email", Some(3));
        assert_eq!(result, Err(ValidationErrorCode::EmailTooLong));
    }

    #[test]
    fn email_length_counts_characters() {
        // 6 chars, 7 bytes: passes the length rule, fails the ASCII pattern
        assert_eq!(
            validate_email("ü@b.de", Some(6)),
            Err(ValidationErrorCode::EmailInvalid)
        );
    }

    #[test]
    fn number_respects_decimals() {
        assert!(is_number("12.34", Some(2)));
        assert!(!is_number("12.345", Some(2)));
        assert!(is_number("12", Some(0)));
        assert!(!is_number("12.0", Some(0)));
        assert!(is_number("12.3456789", None));
    }

    #[test]
    fn number_accepts_sign() {
        assert!(is_number("-3", None));
        assert!(is_number("+3.5", Some(1)));
    }

    #[test]
    fn number_rejects_garbage() {
        assert!(!is_number("", None));
        assert!(!is_number("abc", None));
        assert!(!is_number("1e5", None));
        assert!(!is_number(".5", None));
        assert!(!is_number("5.", None));
        assert!(!is_number("NaN", None));
        assert!(!is_number("\u{0661}\u{0662}", None));
        assert!(!is_number("1.\u{0665}", Some(2)));
        assert_eq!(
            validate_number("1,5", Some(2)),
            Err(ValidationErrorCode::NumberInvalid)
        );
    }
}
