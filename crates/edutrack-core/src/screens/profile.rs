//! Profile view and editor.

use serde::{Deserialize, Serialize};

use crate::model::User;
use crate::validation::{
    sanitize_age_input, sanitize_name_input, validate_profile_form, ProfileForm,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    pub user: User,
    pub is_editing: bool,
    pub form: ProfileForm,
    pub name_error: Option<String>,
    pub error_message: Option<String>,
    pub is_saving: bool,
    pub save_success: bool,
}

impl ProfileState {
    pub fn new(user: User) -> Self {
        Self {
            user,
            is_editing: false,
            form: ProfileForm::default(),
            name_error: None,
            error_message: None,
            is_saving: false,
            save_success: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    /// Replace the displayed user (after login or an XP change).
    UserLoaded(User),
    Edit,
    NameChanged(String),
    UniversityChanged(String),
    CareerChanged(String),
    AgeChanged(String),
    /// Validate the form; on success start saving.
    Save,
    /// The simulated save finished; apply the form to the user.
    Saved,
    DismissSuccess,
    Cancel,
}

pub fn reduce(state: &ProfileState, action: ProfileAction) -> ProfileState {
    match action {
        ProfileAction::UserLoaded(user) => ProfileState {
            user,
            ..state.clone()
        },
        ProfileAction::Edit => ProfileState {
            is_editing: true,
            form: ProfileForm {
                name: state.user.name.clone(),
                university: state.user.university.clone(),
                career: state.user.career.clone(),
                age: state.user.age.to_string(),
            },
            ..state.clone()
        },
        ProfileAction::NameChanged(raw) => {
            let mut next = state.clone();
            next.form.name = sanitize_name_input(&raw);
            next.name_error = None;
            next
        }
        ProfileAction::UniversityChanged(university) => {
            let mut next = state.clone();
            next.form.university = university;
            next
        }
        ProfileAction::CareerChanged(career) => {
            let mut next = state.clone();
            next.form.career = career;
            next
        }
        ProfileAction::AgeChanged(raw) => {
            let mut next = state.clone();
            next.form.age = sanitize_age_input(&raw);
            next
        }
        ProfileAction::Save => {
            let check = validate_profile_form(&state.form);
            ProfileState {
                is_saving: check.is_valid(),
                name_error: check.name_error,
                error_message: check.error_message,
                ..state.clone()
            }
        }
        ProfileAction::Saved => {
            let Some(age) = validate_profile_form(&state.form).age else {
                return ProfileState {
                    is_saving: false,
                    ..state.clone()
                };
            };
            let mut user = state.user.clone();
            user.name = state.form.name.clone();
            user.university = state.form.university.clone();
            user.career = state.form.career.clone();
            user.age = age;
            ProfileState {
                user,
                is_editing: false,
                is_saving: false,
                save_success: true,
                ..state.clone()
            }
        }
        ProfileAction::DismissSuccess => ProfileState {
            save_success: false,
            ..state.clone()
        },
        ProfileAction::Cancel => ProfileState {
            is_editing: false,
            name_error: None,
            error_message: None,
            ..state.clone()
        },
    }
}
