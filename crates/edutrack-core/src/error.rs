//! Core error types for edutrack-core.
//!
//! Form and field validation never fails through these types: validators
//! return a [`crate::validation::ValidationResult`] that the caller renders
//! inline. The enums below cover misuse of the state machine and failures
//! of the configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for edutrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task state machine errors
    #[error("Task error: {0}")]
    Task(#[from] TaskError),

    /// Entity lookup failed
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The action needs a signed-in user
    #[error("No user is signed in")]
    NotSignedIn,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration directory could not be resolved or created
    #[error("Configuration directory unavailable: {0}")]
    DataDir(String),
}

/// Errors raised by task and subtask transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The task has subtasks, so its completion follows them.
    #[error("Task '{task_id}' has subtasks; its completion is derived from them")]
    CompletionDerivedFromSubtasks { task_id: String },

    /// No subtask with the given id belongs to the task.
    #[error("Subtask '{subtask_id}' not found in task '{task_id}'")]
    SubtaskNotFound { task_id: String, subtask_id: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_error_converts_into_core_error() {
        let err: CoreError = TaskError::CompletionDerivedFromSubtasks {
            task_id: "1".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Task(_)));
        assert!(err.to_string().contains("derived"));
    }

    #[test]
    fn config_io_failures_surface_as_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err: CoreError = crate::config::Config::default()
            .save_to(dir.path())
            .unwrap_err()
            .into();
        assert!(matches!(err, CoreError::Config(ConfigError::SaveFailed { .. })));
        assert!(err.to_string().starts_with("Configuration error: Failed to save"));
    }

    #[test]
    fn not_found_message_names_kind() {
        let err = CoreError::NotFound {
            kind: "Task",
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "Task not found: 42");
    }
}
