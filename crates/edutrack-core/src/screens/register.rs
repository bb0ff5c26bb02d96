//! Sign-up form. Every field is checked and reports its own error.

use serde::{Deserialize, Serialize};

use crate::validation::{
    sanitize_name_input, validate_email, validate_name, validate_password_match,
    validate_strong_password,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub confirm_password_error: Option<String>,
    pub is_loading: bool,
    pub register_success: bool,
    pub error_message: Option<String>,
}

impl RegisterState {
    pub fn has_field_errors(&self) -> bool {
        self.name_error.is_some()
            || self.email_error.is_some()
            || self.password_error.is_some()
            || self.confirm_password_error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    /// Raw keyboard input; disallowed characters are dropped.
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    Submit,
    Completed,
    ClearError,
}

pub fn reduce(state: &RegisterState, action: RegisterAction) -> RegisterState {
    match action {
        RegisterAction::NameChanged(raw) => RegisterState {
            name: sanitize_name_input(&raw),
            name_error: None,
            ..state.clone()
        },
        RegisterAction::EmailChanged(email) => RegisterState {
            email,
            email_error: None,
            ..state.clone()
        },
        RegisterAction::PasswordChanged(password) => RegisterState {
            password,
            password_error: None,
            ..state.clone()
        },
        RegisterAction::ConfirmPasswordChanged(confirm_password) => RegisterState {
            confirm_password,
            confirm_password_error: None,
            ..state.clone()
        },
        RegisterAction::Submit => {
            let mut next = RegisterState {
                name_error: validate_name(&state.name).into_error(),
                email_error: validate_email(&state.email).into_error(),
                password_error: validate_strong_password(&state.password).into_error(),
                confirm_password_error: validate_password_match(
                    &state.password,
                    &state.confirm_password,
                )
                .into_error(),
                error_message: None,
                ..state.clone()
            };
            next.is_loading = !next.has_field_errors();
            next
        }
        RegisterAction::Completed => RegisterState {
            is_loading: false,
            register_success: true,
            ..state.clone()
        },
        RegisterAction::ClearError => RegisterState {
            error_message: None,
            ..state.clone()
        },
    }
}
