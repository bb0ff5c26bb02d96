//! Form-level checks and live input sanitizers for the profile editor.

use serde::{Deserialize, Serialize};

use super::name::{validate_name, MAX_NAME_LENGTH};

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 99;

/// Raw profile editor fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub university: String,
    pub career: String,
    pub age: String,
}

/// Result of [`validate_profile_form`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFormCheck {
    /// Inline error for the name field.
    pub name_error: Option<String>,
    /// Banner message; later checks overwrite earlier ones.
    pub error_message: Option<String>,
    /// Parsed age when it is within range.
    pub age: Option<u32>,
}

impl ProfileFormCheck {
    pub fn is_valid(&self) -> bool {
        self.name_error.is_none() && self.error_message.is_none()
    }
}

/// Validate every profile field, collecting the name error and one banner.
pub fn validate_profile_form(form: &ProfileForm) -> ProfileFormCheck {
    let mut check = ProfileFormCheck {
        name_error: validate_name(&form.name).into_error(),
        ..Default::default()
    };

    if form.university.trim().is_empty() {
        check.error_message = Some("University cannot be empty".into());
    }

    if form.career.trim().is_empty() {
        check.error_message = Some("Career cannot be empty".into());
    }

    match form.age.parse::<u32>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => check.age = Some(age),
        _ => {
            check.error_message = Some(format!("Age must be between {MIN_AGE} and {MAX_AGE}"));
        }
    }

    check
}

/// Keep letters and whitespace only, capped at the maximum name length.
pub fn sanitize_name_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .take(MAX_NAME_LENGTH)
        .collect()
}

/// Keep ASCII digits only, at most two of them.
pub fn sanitize_age_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, university: &str, career: &str, age: &str) -> ProfileForm {
        ProfileForm {
            name: name.into(),
            university: university.into(),
            career: career.into(),
            age: age.into(),
        }
    }

    #[test]
    fn valid_form_yields_age() {
        let check = validate_profile_form(&form("Alex Roldan", "UPP", "Software", "21"));
        assert!(check.is_valid());
        assert_eq!(check.age, Some(21));
    }

    #[test]
    fn age_bounds() {
        assert!(!validate_profile_form(&form("Alex", "UPP", "Software", "15")).is_valid());
        assert!(validate_profile_form(&form("Alex", "UPP", "Software", "16")).is_valid());
        assert!(validate_profile_form(&form("Alex", "UPP", "Software", "99")).is_valid());
        assert!(!validate_profile_form(&form("Alex", "UPP", "Software", "")).is_valid());
    }

    #[test]
    fn last_banner_wins() {
        let check = validate_profile_form(&form("Alex", " ", "", "40"));
        assert_eq!(check.error_message.as_deref(), Some("Career cannot be empty"));
        assert!(check.name_error.is_none());
    }

    #[test]
    fn name_error_is_separate_from_banner() {
        let check = validate_profile_form(&form("A1", "UPP", "Software", "20"));
        assert!(check.name_error.is_some());
        assert!(check.error_message.is_none());
        assert!(!check.is_valid());
    }

    #[test]
    fn sanitizers_filter_and_truncate() {
        assert_eq!(sanitize_name_input("Al3x R0ldán!"), "Alx Rldán");
        assert_eq!(sanitize_name_input(&"a".repeat(40)).len(), 30);
        assert_eq!(sanitize_age_input("2a15"), "21");
    }
}
