//! Subject list with an add/edit dialog.

use serde::{Deserialize, Serialize};

use crate::model::Subject;

use super::EMPTY_FIELD;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectsState {
    pub subjects: Vec<Subject>,
    pub show_dialog: bool,
    /// `Some` while the dialog edits an existing subject.
    pub editing_subject: Option<Subject>,
    pub name_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectsAction {
    Loaded(Vec<Subject>),
    ShowAdd,
    ShowEdit(Subject),
    HideDialog,
    Add(Subject),
    Update(Subject),
    Delete(String),
}

pub fn reduce(state: &SubjectsState, action: SubjectsAction) -> SubjectsState {
    let closed = |subjects: Vec<Subject>| SubjectsState {
        subjects,
        show_dialog: false,
        editing_subject: None,
        name_error: None,
    };

    match action {
        SubjectsAction::Loaded(subjects) => SubjectsState {
            subjects,
            ..state.clone()
        },
        SubjectsAction::ShowAdd => SubjectsState {
            show_dialog: true,
            editing_subject: None,
            name_error: None,
            ..state.clone()
        },
        SubjectsAction::ShowEdit(subject) => SubjectsState {
            show_dialog: true,
            editing_subject: Some(subject),
            name_error: None,
            ..state.clone()
        },
        SubjectsAction::HideDialog => closed(state.subjects.clone()),
        SubjectsAction::Add(subject) | SubjectsAction::Update(subject)
            if subject.name.trim().is_empty() =>
        {
            SubjectsState {
                name_error: Some(EMPTY_FIELD.to_string()),
                ..state.clone()
            }
        }
        SubjectsAction::Add(subject) => {
            let mut subjects = state.subjects.clone();
            subjects.push(subject);
            closed(subjects)
        }
        SubjectsAction::Update(subject) => {
            let subjects = state
                .subjects
                .iter()
                .map(|s| if s.id == subject.id { subject.clone() } else { s.clone() })
                .collect();
            closed(subjects)
        }
        SubjectsAction::Delete(id) => SubjectsState {
            subjects: state.subjects.iter().filter(|s| s.id != id).cloned().collect(),
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;

    fn loaded() -> SubjectsState {
        reduce(
            &SubjectsState::default(),
            SubjectsAction::Loaded(fixtures::subjects("u")),
        )
    }

    #[test]
    fn add_update_delete() {
        let state = reduce(&loaded(), SubjectsAction::ShowAdd);
        let mut physics = fixtures::subjects("u")[0].clone();
        physics.id = "9".into();
        physics.name = "Physics".into();
        let state = reduce(&state, SubjectsAction::Add(physics.clone()));
        assert_eq!(state.subjects.len(), 4);
        assert!(!state.show_dialog);

        physics.name = "Physics II".into();
        let state = reduce(&state, SubjectsAction::Update(physics));
        assert_eq!(state.subjects[3].name, "Physics II");

        let state = reduce(&state, SubjectsAction::Delete("9".into()));
        assert_eq!(state.subjects.len(), 3);
    }

    #[test]
    fn blank_name_keeps_dialog_open() {
        let state = reduce(&loaded(), SubjectsAction::ShowAdd);
        let mut blank = fixtures::subjects("u")[0].clone();
        blank.id = "9".into();
        blank.name = "  ".into();
        let state = reduce(&state, SubjectsAction::Add(blank));
        assert!(state.show_dialog);
        assert_eq!(state.name_error.as_deref(), Some(EMPTY_FIELD));
        assert_eq!(state.subjects.len(), 3);
    }
}
