//! Phone number validation and normalization.
//!
//! Guests log in by phone, so two spellings of the same number must map to
//! one key: `"(11) 99999-8888"` and `"11999998888"` both become `11999998888`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{CoreError, CoreResult};

// Checked after spaces and hyphens are removed. ASCII digits only, so the
// key built by `normalize_phone` always carries every digit.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\([0-9]{2}\)[0-9]{4,5}[0-9]{4}|[0-9]{10,11}|\+[0-9]{2}[0-9]{10,11})$")
        .expect("phone pattern is a valid regex")
});

/// `true` for `(DD) DDDD[D]-DDDD`, bare 10-11 digits, or `+CC` followed by 10-11 digits.
pub fn is_valid_phone(input: &str) -> bool {
    let compact: String = input.chars().filter(|c| *c != ' ' && *c != '-').collect();
    PHONE_PATTERN.is_match(&compact)
}

/// Digits only, keeping a leading `+`.
pub fn normalize_phone(input: &str) -> String {
    let trimmed = input.trim();
    let mut key = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        key.push('+');
    }
    key.extend(trimmed.chars().filter(char::is_ascii_digit));
    key
}

/// Validates the format and returns the phone key.
pub fn validate_phone(input: &str) -> CoreResult<String> {
    if !is_valid_phone(input) {
        return Err(CoreError::ValidationError("Invalid phone number format".into()));
    }
    Ok(normalize_phone(input))
}
