//! Predicate filters over task lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::model::Task;

/// Task list filter chips.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    /// High priority and not yet completed.
    HighPriorityPending,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::HighPriorityPending => task.is_high_priority() && !task.completed,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" => Ok(TaskFilter::Completed),
            "high" | "high_priority" | "high-priority" => Ok(TaskFilter::HighPriorityPending),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// Tasks matching `filter`, in their original order.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Pending tasks due at or after `now`, soonest first, at most `limit`.
pub fn upcoming_tasks(tasks: &[Task], now: DateTime<Utc>, limit: usize) -> Vec<Task> {
    let mut upcoming: Vec<Task> = tasks
        .iter()
        .filter(|t| !t.completed && t.due_at >= now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|t| t.due_at);
    upcoming.truncate(limit);
    upcoming
}
