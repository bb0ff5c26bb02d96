//! Password recovery request.

use serde::{Deserialize, Serialize};

use crate::validation::validate_email;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryState {
    pub email: String,
    pub email_error: Option<String>,
    pub is_loading: bool,
    pub recovery_success: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryAction {
    EmailChanged(String),
    Submit,
    Completed,
    ClearSuccess,
}

pub fn reduce(state: &RecoveryState, action: RecoveryAction) -> RecoveryState {
    match action {
        RecoveryAction::EmailChanged(email) => RecoveryState {
            email,
            email_error: None,
            error_message: None,
            ..state.clone()
        },
        RecoveryAction::Submit => {
            let email_error = validate_email(&state.email).into_error();
            RecoveryState {
                is_loading: email_error.is_none(),
                email_error,
                error_message: None,
                ..state.clone()
            }
        }
        RecoveryAction::Completed => RecoveryState {
            is_loading: false,
            recovery_success: true,
            ..state.clone()
        },
        RecoveryAction::ClearSuccess => RecoveryState {
            recovery_success: false,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_requires_valid_email() {
        let state = reduce(&RecoveryState::default(), RecoveryAction::Submit);
        assert!(state.email_error.is_some());
        assert!(!state.is_loading);

        let state = reduce(&state, RecoveryAction::EmailChanged("alex@upp.edu.mx".into()));
        assert!(state.email_error.is_none());
        let state = reduce(&state, RecoveryAction::Submit);
        assert!(state.is_loading);
        let state = reduce(&state, RecoveryAction::Completed);
        assert!(state.recovery_success);
        assert!(!reduce(&state, RecoveryAction::ClearSuccess).recovery_success);
    }
}
