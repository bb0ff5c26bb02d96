//! Task commands over the seeded demo data.

use clap::Subcommand;
use edutrack_core::screens::tasks::TasksAction;
use edutrack_core::task::{week_bounds, weekly_tasks};
use edutrack_core::{App, CoreError, TaskFilter};
use serde_json::json;

use super::{demo_app, print_json, CmdResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks
    List {
        /// all, pending, completed or high
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
    /// Tasks due this week and how many are done
    Week,
    /// Toggle a task without subtasks
    Toggle {
        /// Task ID
        id: String,
    },
    /// Toggle one subtask; the task completes when all are done
    ToggleSubtask {
        /// Task ID
        task_id: String,
        /// Subtask ID
        subtask_id: String,
    },
}

pub fn run(action: TaskAction) -> CmdResult {
    let mut app = demo_app()?;
    match action {
        TaskAction::List { filter } => {
            let tasks = app.dispatch_tasks(TasksAction::FilterChanged(filter))?;
            print_json(&tasks.filtered_tasks)
        }
        TaskAction::Week => {
            let home = app.home().ok_or(CoreError::NotSignedIn)?;
            let now = chrono::Utc::now().with_timezone(&app.config().calendar.offset());
            print_json(&json!({
                "window": week_bounds(&now),
                "progress": home.week,
                "tasks": weekly_tasks(&app.tasks().tasks, &now),
            }))
        }
        TaskAction::Toggle { id } => {
            ensure_task(&app, &id)?;
            app.toggle_task(&id)?;
            report(&mut app, &id)
        }
        TaskAction::ToggleSubtask { task_id, subtask_id } => {
            ensure_task(&app, &task_id)?;
            app.toggle_subtask(&task_id, &subtask_id)?;
            report(&mut app, &task_id)
        }
    }
}

fn ensure_task(app: &App, id: &str) -> Result<(), CoreError> {
    if app.tasks().tasks.iter().any(|t| t.id == id) {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            kind: "Task",
            id: id.to_string(),
        })
    }
}

/// Print the toggled task, the user's XP and the events, or fail with the
/// screen's error banner.
fn report(app: &mut App, id: &str) -> CmdResult {
    if let Some(message) = &app.tasks().error_message {
        return Err(message.clone().into());
    }
    let task = app.tasks().tasks.iter().find(|t| t.id == id).cloned();
    let message = app.tasks().success_message.clone();
    let user = app.current_user().ok_or(CoreError::NotSignedIn)?;
    let events = app.drain_events();
    print_json(&json!({
        "task": task,
        "message": message,
        "current_xp": user.current_xp,
        "total_xp": user.total_xp,
        "events": events,
    }))
}
