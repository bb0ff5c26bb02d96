//! Completion transitions for tasks and their subtasks.
//!
//! Rule: a task with subtasks is completed if and only if all of them are.
//! Only tasks without subtasks can be toggled directly, and a direct toggle
//! never touches subtasks.

use chrono::{DateTime, Utc};

use super::TaskTransition;
use crate::error::TaskError;
use crate::model::{Subtask, Task};

/// Flip a task's completion flag, stamping or clearing `completed_at`.
///
/// Returns an error and leaves the task alone if it has subtasks.
pub fn toggle_task(task: &Task, now: DateTime<Utc>) -> Result<(Task, TaskTransition), TaskError> {
    if !task.subtasks.is_empty() {
        return Err(TaskError::CompletionDerivedFromSubtasks {
            task_id: task.id.clone(),
        });
    }

    let mut updated = task.clone();
    updated.completed = !task.completed;
    updated.completed_at = updated.completed.then_some(now);

    let transition = TaskTransition::between(task, &updated);
    tracing::info!(task = %task.id, ?transition, "task toggled");
    Ok((updated, transition))
}

/// Flip one subtask and re-derive the parent's completion.
pub fn toggle_subtask(
    task: &Task,
    subtask_id: &str,
    now: DateTime<Utc>,
) -> Result<(Task, TaskTransition), TaskError> {
    let mut updated = task.clone();
    let subtask = updated
        .subtasks
        .iter_mut()
        .find(|s| s.id == subtask_id)
        .ok_or_else(|| TaskError::SubtaskNotFound {
            task_id: task.id.clone(),
            subtask_id: subtask_id.to_string(),
        })?;
    subtask.completed = !subtask.completed;

    derive_completion(&mut updated, now);

    let transition = TaskTransition::between(task, &updated);
    tracing::debug!(task = %task.id, subtask = subtask_id, ?transition, "subtask toggled");
    Ok((updated, transition))
}

/// Save an edited subtask list.
///
/// A non-empty list re-derives completion; an empty list leaves the flag
/// as it was, since the task becomes directly toggleable again.
pub fn replace_subtasks(
    task: &Task,
    subtasks: Vec<Subtask>,
    now: DateTime<Utc>,
) -> (Task, TaskTransition) {
    let mut updated = task.clone();
    updated.subtasks = subtasks;
    if !updated.subtasks.is_empty() {
        derive_completion(&mut updated, now);
    }
    let transition = TaskTransition::between(task, &updated);
    (updated, transition)
}

fn derive_completion(task: &mut Task, now: DateTime<Utc>) {
    let all_done = task.all_subtasks_completed();
    match (task.completed, all_done) {
        (false, true) => {
            task.completed = true;
            task.completed_at = Some(now);
        }
        (true, false) => {
            task.completed = false;
            task.completed_at = None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 10, 0, 0).unwrap()
    }

    fn task(subtasks: Vec<Subtask>) -> Task {
        let mut task = Task::new("1", "Mobile exam", now() + Duration::days(1));
        task.xp_reward = 50;
        task.subtasks = subtasks;
        task
    }

    #[test]
    fn toggle_twice_restores_flag_and_clears_timestamp() {
        let original = task(vec![]);
        let (done, t1) = toggle_task(&original, now()).unwrap();
        assert!(done.completed);
        assert_eq!(done.completed_at, Some(now()));
        assert_eq!(t1, TaskTransition::Completed { xp_reward: 50 });

        let (back, t2) = toggle_task(&done, now()).unwrap();
        assert!(!back.completed);
        assert!(back.completed_at.is_none());
        assert_eq!(t2, TaskTransition::Reopened { xp_reward: 50 });
        assert_eq!(back, original);
    }

    #[test]
    fn direct_toggle_rejected_with_subtasks() {
        let t = task(vec![Subtask::new("a", "Study", false)]);
        assert_eq!(
            toggle_task(&t, now()),
            Err(TaskError::CompletionDerivedFromSubtasks {
                task_id: "1".into()
            })
        );
    }

    #[test]
    fn last_subtask_completes_parent() {
        let t = task(vec![
            Subtask::new("a", "Compose", true),
            Subtask::new("b", "MVVM", false),
        ]);
        let (done, transition) = toggle_subtask(&t, "b", now()).unwrap();
        assert!(done.completed);
        assert_eq!(done.completed_at, Some(now()));
        assert_eq!(transition, TaskTransition::Completed { xp_reward: 50 });
    }

    #[test]
    fn unchecking_a_subtask_reopens_parent() {
        let t = task(vec![
            Subtask::new("a", "Compose", true),
            Subtask::new("b", "MVVM", true),
        ]);
        let (done, _) = replace_subtasks(&t, t.subtasks.clone(), now());
        assert!(done.completed);

        let (reopened, transition) = toggle_subtask(&done, "a", now()).unwrap();
        assert!(!reopened.completed);
        assert!(reopened.completed_at.is_none());
        assert_eq!(transition, TaskTransition::Reopened { xp_reward: 50 });
    }

    #[test]
    fn partial_progress_is_unchanged() {
        let t = task(vec![
            Subtask::new("a", "Compose", false),
            Subtask::new("b", "MVVM", false),
        ]);
        let (updated, transition) = toggle_subtask(&t, "a", now()).unwrap();
        assert!(!updated.completed);
        assert_eq!(transition, TaskTransition::Unchanged);
        assert!(updated.subtasks[0].completed);
    }

    #[test]
    fn unknown_subtask() {
        let t = task(vec![Subtask::new("a", "Compose", false)]);
        assert!(matches!(
            toggle_subtask(&t, "zzz", now()),
            Err(TaskError::SubtaskNotFound { .. })
        ));
    }

    #[test]
    fn adding_pending_subtask_reopens_completed_task() {
        let (done, _) = toggle_task(&task(vec![]), now()).unwrap();
        let (updated, transition) =
            replace_subtasks(&done, vec![Subtask::new("n", "New step", false)], now());
        assert!(!updated.completed);
        assert_eq!(transition, TaskTransition::Reopened { xp_reward: 50 });
    }

    #[test]
    fn clearing_subtasks_keeps_flag() {
        let t = task(vec![Subtask::new("a", "Compose", true)]);
        let (done, _) = replace_subtasks(&t, t.subtasks.clone(), now());
        let (cleared, transition) = replace_subtasks(&done, vec![], now());
        assert!(cleared.completed);
        assert_eq!(transition, TaskTransition::Unchanged);
    }
}
