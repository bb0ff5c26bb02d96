//! Person name validation (letters, Spanish accents and single spaces).

use std::sync::LazyLock;

use regex::Regex;

use super::{char_len, ValidationResult};

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 30;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+=[]{};':\"\\|,.<>/?`~";

/// Whitespace here is the ASCII set only; no-break and em spaces are rejected.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\t\n\x0B\x0C\r ]+$").expect("name pattern is valid")
});

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{So}\p{Sk}]").expect("symbol pattern is valid"));

/// Validate a display name.
///
/// Length and the character class are checked against the trimmed value;
/// the remaining checks look at the raw input.
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::invalid("Name cannot be empty");
    }

    let trimmed = name.trim();
    let len = char_len(trimmed);
    if len < MIN_NAME_LENGTH {
        return ValidationResult::invalid(format!(
            "Name must be at least {MIN_NAME_LENGTH} characters"
        ));
    }

    if len > MAX_NAME_LENGTH {
        return ValidationResult::invalid(format!(
            "Name cannot exceed {MAX_NAME_LENGTH} characters"
        ));
    }

    if !NAME_RE.is_match(trimmed) {
        return ValidationResult::invalid("Name can only contain letters and spaces");
    }

    if name.chars().any(char::is_numeric) {
        return ValidationResult::invalid("Name cannot contain numbers");
    }

    if name.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return ValidationResult::invalid("Name cannot contain special characters");
    }

    if SYMBOL_RE.is_match(name) {
        return ValidationResult::invalid("Name cannot contain emojis");
    }

    if !name.chars().any(char::is_alphabetic) {
        return ValidationResult::invalid("Name must contain at least one letter");
    }

    if name.contains("  ") {
        return ValidationResult::invalid("Name cannot contain consecutive spaces");
    }

    ValidationResult::ok()
}
