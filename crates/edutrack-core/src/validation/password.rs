//! Password rules and strength scoring.

use std::sync::LazyLock;

use regex::Regex;

use super::{char_len, ValidationResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 50;

/// Decimal digits in any script (Unicode `Nd`), not only `0-9`.
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("digit pattern is valid"));

/// Basic password checks: not blank, within length bounds.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.trim().is_empty() {
        return ValidationResult::invalid("Password cannot be empty");
    }

    let len = char_len(password);
    if len < MIN_PASSWORD_LENGTH {
        return ValidationResult::invalid(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }

    if len > MAX_PASSWORD_LENGTH {
        return ValidationResult::invalid(format!(
            "Password cannot exceed {MAX_PASSWORD_LENGTH} characters"
        ));
    }

    ValidationResult::ok()
}

/// Basic checks plus at least one letter and one digit.
pub fn validate_strong_password(password: &str) -> ValidationResult {
    let basic = validate_password(password);
    if !basic.valid {
        return basic;
    }

    if !password.chars().any(char::is_alphabetic) {
        return ValidationResult::invalid("Password must contain at least one letter");
    }

    if !DIGIT_RE.is_match(password) {
        return ValidationResult::invalid("Password must contain at least one number");
    }

    ValidationResult::ok()
}

pub fn validate_password_match(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return ValidationResult::invalid("Passwords do not match");
    }
    ValidationResult::ok()
}

/// Additive strength score in `0..=100`.
///
/// Length contributes 10/20/30 points at 6/8/12 characters; lowercase adds
/// 10, uppercase 20, a digit 20 and any non-alphanumeric character 20.
pub fn password_strength(password: &str) -> u32 {
    let mut strength = match char_len(password) {
        n if n >= 12 => 30,
        n if n >= 8 => 20,
        n if n >= 6 => 10,
        _ => 0,
    };

    if password.chars().any(char::is_lowercase) {
        strength += 10;
    }
    if password.chars().any(char::is_uppercase) {
        strength += 20;
    }
    if DIGIT_RE.is_match(password) {
        strength += 20;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        strength += 20;
    }

    strength.min(100)
}
