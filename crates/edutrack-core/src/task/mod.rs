//! Task aggregation and the task/subtask state machine.
//!
//! A task is either pending or completed:
//!
//!   PENDING <──────> COMPLETED
//!
//! With no subtasks the user toggles it directly. With subtasks the state
//! is derived: completed exactly when every subtask is completed. See
//! [`cascade`] for the transitions.

pub mod calendar;
pub mod cascade;
pub mod filter;
pub mod week;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Task;

pub use calendar::{shift_month, tasks_on_day, tasks_per_day, MonthGrid};
pub use cascade::{replace_subtasks, toggle_subtask, toggle_task};
pub use filter::{filter_tasks, upcoming_tasks, TaskFilter};
pub use week::{week_bounds, weekly_progress, weekly_tasks, WeekWindow, WeeklyProgress};

/// Task state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn of(task: &Task) -> Self {
        if task.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Effect of an action on a task's completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskTransition {
    /// Pending → Completed; the reward is now earned.
    Completed { xp_reward: u32 },
    /// Completed → Pending; the reward credited at completion is taken back.
    Reopened { xp_reward: u32 },
    /// Completion did not change.
    Unchanged,
}

impl TaskTransition {
    pub(crate) fn between(before: &Task, after: &Task) -> Self {
        match (before.completed, after.completed) {
            (false, true) => TaskTransition::Completed {
                xp_reward: after.xp_reward,
            },
            (true, false) => TaskTransition::Reopened {
                xp_reward: before.xp_reward,
            },
            _ => TaskTransition::Unchanged,
        }
    }

    /// Success banner text for this transition, if any.
    pub fn banner(&self) -> Option<String> {
        match self {
            TaskTransition::Completed { xp_reward } => {
                Some(format!("Task completed! +{xp_reward} XP earned"))
            }
            TaskTransition::Reopened { .. } => Some("Task marked as pending".to_string()),
            TaskTransition::Unchanged => None,
        }
    }
}
