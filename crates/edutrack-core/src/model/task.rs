//! Task and subtask records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority; drives the XP reward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// Kind of academic work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Homework,
    Exam,
    Project,
    Reading,
    Study,
    Other,
}

impl Default for TaskType {
    fn default() -> Self {
        TaskType::Homework
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "homework" => Ok(TaskType::Homework),
            "exam" => Ok(TaskType::Exam),
            "project" => Ok(TaskType::Project),
            "reading" => Ok(TaskType::Reading),
            "study" => Ok(TaskType::Study),
            "other" => Ok(TaskType::Other),
            other => Err(format!("unknown task type: {other}")),
        }
    }
}

/// A checklist item owned by exactly one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(id: impl Into<String>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }
}

/// A unit of coursework with a due date and an XP reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub subject_id: String,
    /// Denormalized subject name for display.
    #[serde(default)]
    pub subject_name: String,
    pub due_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create a pending task with no subtasks.
    pub fn new(id: impl Into<String>, title: impl Into<String>, due_at: DateTime<Utc>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            notes: None,
            subject_id: String::new(),
            subject_name: String::new(),
            due_at,
            priority: Priority::default(),
            task_type: TaskType::default(),
            xp_reward: 0,
            completed: false,
            completed_at: None,
            subtasks: Vec::new(),
        }
    }

    /// Fraction of subtasks completed (0.0 to 1.0).
    ///
    /// Without subtasks this reflects the task's own flag.
    pub fn subtask_progress(&self) -> f64 {
        if self.subtasks.is_empty() {
            return if self.completed { 1.0 } else { 0.0 };
        }
        self.completed_subtask_count() as f64 / self.subtasks.len() as f64
    }

    pub fn completed_subtask_count(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    /// True when subtasks exist and every one is done.
    pub fn all_subtasks_completed(&self) -> bool {
        !self.subtasks.is_empty() && self.subtasks.iter().all(|s| s.completed)
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_total_eq<T: Eq>(_: &T) {}

    #[test]
    fn tasks_compare_with_total_equality() {
        let task = task_with(vec![Subtask::new("s1", "Outline", false)]);
        assert_total_eq(&task);
        assert_eq!(task.clone(), task);
    }

    fn task_with(subtasks: Vec<Subtask>) -> Task {
        let mut task = Task::new("t", "Read chapter", Utc::now());
        task.subtasks = subtasks;
        task
    }

    #[test]
    fn progress_without_subtasks_follows_flag() {
        let mut task = task_with(vec![]);
        assert_eq!(task.subtask_progress(), 0.0);
        task.completed = true;
        assert_eq!(task.subtask_progress(), 1.0);
        assert!(!task.all_subtasks_completed());
    }

    #[test]
    fn progress_counts_subtasks() {
        let task = task_with(vec![
            Subtask::new("1", "a", true),
            Subtask::new("2", "b", false),
            Subtask::new("3", "c", false),
            Subtask::new("4", "d", false),
        ]);
        assert_eq!(task.completed_subtask_count(), 1);
        assert_eq!(task.subtask_progress(), 0.25);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn task_serialization() {
        let task = task_with(vec![Subtask::new("1", "a", true)]);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"priority\":\"medium\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
