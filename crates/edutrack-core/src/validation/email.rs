//! Email address validation.

use std::sync::LazyLock;

use regex::Regex;

use super::{char_len, ValidationResult};

pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
pub const MIN_EMAIL_LENGTH: usize = 5;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Validate an email address.
///
/// Order of checks: blank, embedded space, minimum length, pattern,
/// presence of `@` and `.`, single `@`.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::invalid("Email cannot be empty");
    }

    if email.contains(' ') {
        return ValidationResult::invalid("Email must not contain spaces");
    }

    if char_len(email) < MIN_EMAIL_LENGTH {
        return ValidationResult::invalid("Email is too short");
    }

    if !EMAIL_RE.is_match(email) {
        return ValidationResult::invalid("Invalid email address");
    }

    if !email.contains('@') || !email.contains('.') {
        return ValidationResult::invalid("Email must contain @ and a valid domain");
    }

    if email.split('@').count() != 2 {
        return ValidationResult::invalid("Email must contain a single @ symbol");
    }

    ValidationResult::ok()
}
