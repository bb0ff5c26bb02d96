//! Sign-in form.

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::validation::{validate_email, validate_password};

pub const LOGIN_FAILED: &str = "Incorrect email or password";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub is_loading: bool,
    pub login_success: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    EmailChanged(String),
    PasswordChanged(String),
    /// Validate fields; on success start loading.
    Submit,
    /// The simulated backend answered.
    Resolved { accepted: bool },
    ClearError,
}

pub fn reduce(state: &LoginState, action: LoginAction) -> LoginState {
    match action {
        LoginAction::EmailChanged(email) => LoginState {
            email,
            email_error: None,
            error_message: None,
            ..state.clone()
        },
        LoginAction::PasswordChanged(password) => LoginState {
            password,
            password_error: None,
            error_message: None,
            ..state.clone()
        },
        LoginAction::Submit => {
            let mut next = LoginState {
                email_error: None,
                password_error: None,
                error_message: None,
                ..state.clone()
            };
            if let Some(error) = validate_email(&next.email).into_error() {
                next.email_error = Some(error);
                return next;
            }
            if let Some(error) = validate_password(&next.password).into_error() {
                next.password_error = Some(error);
                return next;
            }
            next.is_loading = true;
            next
        }
        LoginAction::Resolved { accepted } => LoginState {
            is_loading: false,
            login_success: accepted,
            error_message: (!accepted).then(|| LOGIN_FAILED.to_string()),
            ..state.clone()
        },
        LoginAction::ClearError => LoginState {
            error_message: None,
            ..state.clone()
        },
    }
}

/// Whether the typed credentials are the configured demo account.
pub fn credentials_match(state: &LoginState, auth: &AuthConfig) -> bool {
    state.email == auth.demo_email && state.password == auth.demo_password
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(email: &str, password: &str) -> LoginState {
        let state = reduce(&LoginState::default(), LoginAction::EmailChanged(email.into()));
        reduce(&state, LoginAction::PasswordChanged(password.into()))
    }

    #[test]
    fn invalid_email_stops_before_password() {
        let state = reduce(&typed("a@b", ""), LoginAction::Submit);
        assert!(state.email_error.is_some());
        assert!(state.password_error.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn valid_fields_start_loading() {
        let state = reduce(&typed("alex@upp.edu.mx", "123456"), LoginAction::Submit);
        assert!(state.is_loading);
        assert!(credentials_match(&state, &AuthConfig::default()));
    }

    #[test]
    fn rejected_login_sets_banner_until_edit() {
        let state = reduce(&typed("alex@upp.edu.mx", "654321"), LoginAction::Submit);
        let state = reduce(&state, LoginAction::Resolved { accepted: false });
        assert!(!state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some(LOGIN_FAILED));
        let state = reduce(&state, LoginAction::PasswordChanged("123456".into()));
        assert!(state.error_message.is_none());
    }
}
