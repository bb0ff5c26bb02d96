//! Field validators. A failed validation is still a successful command;
//! the verdict is in the JSON.

use clap::Subcommand;
use edutrack_core::validation::{
    password_strength, validate_email, validate_name, validate_password,
    validate_password_match, validate_strong_password,
};
use serde_json::json;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum ValidateAction {
    /// Check an email address
    Email { value: String },
    /// Check a person's name
    Name { value: String },
    /// Check a password
    Password {
        value: String,
        /// Also require a letter and a digit
        #[arg(long)]
        strong: bool,
    },
    /// Check that a password and its confirmation are equal
    Match { password: String, confirm: String },
    /// Score a password from 0 to 100
    Strength { value: String },
}

pub fn run(action: ValidateAction) -> CmdResult {
    let result = match action {
        ValidateAction::Email { value } => validate_email(&value),
        ValidateAction::Name { value } => validate_name(&value),
        ValidateAction::Password { value, strong } => {
            if strong {
                validate_strong_password(&value)
            } else {
                validate_password(&value)
            }
        }
        ValidateAction::Match { password, confirm } => {
            validate_password_match(&password, &confirm)
        }
        ValidateAction::Strength { value } => {
            return print_json(&json!({ "strength": password_strength(&value) }));
        }
    };
    print_json(&result)
}
