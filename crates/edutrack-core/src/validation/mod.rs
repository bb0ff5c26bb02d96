//! Field and form validators.
//!
//! Every validator is a pure function that returns a [`ValidationResult`].
//! Checks run in a fixed order and stop at the first failure, so the caller
//! only ever has one message to show next to the offending field.

pub mod email;
pub mod form;
pub mod name;
pub mod password;

use serde::{Deserialize, Serialize};

pub use email::validate_email;
pub use form::{sanitize_age_input, sanitize_name_input, validate_profile_form, ProfileForm};
pub use name::validate_name;
pub use password::{
    password_strength, validate_password, validate_password_match, validate_strong_password,
};

/// Outcome of a single validator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The message to display, if the input was rejected.
    pub fn into_error(self) -> Option<String> {
        if self.valid {
            None
        } else {
            self.error
        }
    }
}

/// Length in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
