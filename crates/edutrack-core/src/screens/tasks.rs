//! Task list with filter chips, create/edit/delete dialogs and a subtask
//! editor.
//!
//! Due dates are edited as local wall-clock time in the state's UTC offset
//! and stored as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::{fixed_offset, EMPTY_FIELD};
use crate::model::{Priority, Subtask, Task, TaskType};
use crate::task::cascade::{replace_subtasks, toggle_subtask, toggle_task};
use crate::task::filter::{filter_tasks, TaskFilter};
use crate::task::week::local_to_utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDialog {
    Create,
    Edit,
    Delete,
    Subtasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Picker {
    Date,
    Time,
}

/// Fields of the create/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEditor {
    pub title: String,
    pub description: String,
    pub notes: String,
    pub subject_id: String,
    pub subject_name: String,
    pub priority: Priority,
    pub task_type: TaskType,
    /// Local wall-clock due time.
    pub due_local: NaiveDateTime,
    pub subtasks: Vec<Subtask>,
    pub new_subtask_title: String,
}

impl TaskEditor {
    fn blank(due_local: NaiveDateTime) -> Self {
        TaskEditor {
            title: String::new(),
            description: String::new(),
            notes: String::new(),
            subject_id: String::new(),
            subject_name: String::new(),
            priority: Priority::Medium,
            task_type: TaskType::Homework,
            due_local,
            subtasks: Vec::new(),
            new_subtask_title: String::new(),
        }
    }

    fn from_task(task: &Task, utc_offset_minutes: i32) -> Self {
        TaskEditor {
            title: task.title.clone(),
            description: task.description.clone(),
            notes: task.notes.clone().unwrap_or_default(),
            subject_id: task.subject_id.clone(),
            subject_name: task.subject_name.clone(),
            priority: task.priority,
            task_type: task.task_type,
            due_local: task
                .due_at
                .with_timezone(&fixed_offset(utc_offset_minutes))
                .naive_local(),
            subtasks: task.subtasks.clone(),
            new_subtask_title: String::new(),
        }
    }

    fn notes(&self) -> Option<String> {
        (!self.notes.trim().is_empty()).then(|| self.notes.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub filtered_tasks: Vec<Task>,
    pub selected_filter: TaskFilter,
    pub dialog: Option<TaskDialog>,
    pub picker: Option<Picker>,
    pub selected_task_id: Option<String>,
    pub editor: TaskEditor,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub utc_offset_minutes: i32,
}

impl TasksState {
    pub fn new(utc_offset_minutes: i32) -> Self {
        TasksState {
            tasks: Vec::new(),
            filtered_tasks: Vec::new(),
            selected_filter: TaskFilter::All,
            dialog: None,
            picker: None,
            selected_task_id: None,
            editor: TaskEditor::blank(NaiveDateTime::default()),
            is_loading: false,
            error_message: None,
            success_message: None,
            utc_offset_minutes,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let id = self.selected_task_id.as_deref()?;
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn due_utc(&self) -> DateTime<Utc> {
        local_to_utc(&fixed_offset(self.utc_offset_minutes), self.editor.due_local)
    }

    /// Replace the task list and re-apply the selected filter.
    fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.filtered_tasks = filter_tasks(&tasks, self.selected_filter);
        self.tasks = tasks;
        self
    }

    fn replace_task(self, updated: Task) -> Self {
        let tasks = self
            .tasks
            .iter()
            .map(|t| if t.id == updated.id { updated.clone() } else { t.clone() })
            .collect();
        self.with_tasks(tasks)
    }

    fn closed(mut self) -> Self {
        self.dialog = None;
        self.picker = None;
        self.selected_task_id = None;
        self.editor.new_subtask_title.clear();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TasksAction {
    Loaded(Vec<Task>),
    FilterChanged(TaskFilter),

    ShowCreate { now: DateTime<Utc> },
    ShowEdit(String),
    ShowDelete(String),
    ShowSubtasks(String),
    Dismiss,

    TitleChanged(String),
    DescriptionChanged(String),
    NotesChanged(String),
    SubjectChanged { id: String, name: String },
    PriorityChanged(Priority),
    TypeChanged(TaskType),
    DueChanged(NaiveDateTime),
    ShowDatePicker,
    ShowTimePicker,
    DateSelected(NaiveDate),
    TimeSelected { hour: u32, minute: u32 },

    NewSubtaskTitleChanged(String),
    /// Append the typed subtask under the given id.
    AddSubtask { id: String },
    RemoveSubtask(String),
    SaveSubtasks { now: DateTime<Utc> },

    /// Validate the editor; on success start loading.
    SubmitCreate,
    SubmitUpdate,
    CreateConfirmed { id: String, xp_reward: u32 },
    UpdateConfirmed { now: DateTime<Utc>, xp_reward: u32 },
    DeleteConfirmed,

    ToggleTask { id: String, now: DateTime<Utc> },
    ToggleSubtask { task_id: String, subtask_id: String, now: DateTime<Utc> },

    ClearSuccess,
    ClearError,
}

pub fn reduce(state: &TasksState, action: TasksAction) -> TasksState {
    let mut next = state.clone();
    match action {
        TasksAction::Loaded(tasks) => return next.with_tasks(tasks),
        TasksAction::FilterChanged(filter) => {
            next.selected_filter = filter;
            next.filtered_tasks = filter_tasks(&next.tasks, filter);
        }

        TasksAction::ShowCreate { now } => {
            let due_local = now
                .with_timezone(&fixed_offset(state.utc_offset_minutes))
                .naive_local();
            next.dialog = Some(TaskDialog::Create);
            next.selected_task_id = None;
            next.editor = TaskEditor::blank(due_local);
        }
        TasksAction::ShowEdit(id) => {
            if let Some(task) = state.find(&id) {
                next.editor = TaskEditor::from_task(task, state.utc_offset_minutes);
                next.dialog = Some(TaskDialog::Edit);
                next.selected_task_id = Some(id);
            }
        }
        TasksAction::ShowDelete(id) => {
            if state.find(&id).is_some() {
                next.dialog = Some(TaskDialog::Delete);
                next.selected_task_id = Some(id);
            }
        }
        TasksAction::ShowSubtasks(id) => {
            if let Some(task) = state.find(&id) {
                next.editor.subtasks = task.subtasks.clone();
                next.editor.new_subtask_title.clear();
                next.dialog = Some(TaskDialog::Subtasks);
                next.selected_task_id = Some(id);
            }
        }
        TasksAction::Dismiss => return next.closed(),

        TasksAction::TitleChanged(title) => next.editor.title = title,
        TasksAction::DescriptionChanged(description) => next.editor.description = description,
        TasksAction::NotesChanged(notes) => next.editor.notes = notes,
        TasksAction::SubjectChanged { id, name } => {
            next.editor.subject_id = id;
            next.editor.subject_name = name;
        }
        TasksAction::PriorityChanged(priority) => next.editor.priority = priority,
        TasksAction::TypeChanged(task_type) => next.editor.task_type = task_type,
        TasksAction::DueChanged(due_local) => next.editor.due_local = due_local,
        TasksAction::ShowDatePicker => next.picker = Some(Picker::Date),
        TasksAction::ShowTimePicker => next.picker = Some(Picker::Time),
        TasksAction::DateSelected(date) => {
            next.editor.due_local = date.and_time(next.editor.due_local.time());
            next.picker = None;
        }
        TasksAction::TimeSelected { hour, minute } => {
            if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                next.editor.due_local = next.editor.due_local.date().and_time(time);
            }
            next.picker = None;
        }

        TasksAction::NewSubtaskTitleChanged(title) => next.editor.new_subtask_title = title,
        TasksAction::AddSubtask { id } => {
            let title = next.editor.new_subtask_title.trim().to_string();
            if !title.is_empty() {
                next.editor.subtasks.push(Subtask::new(id, title, false));
                next.editor.new_subtask_title.clear();
            }
        }
        TasksAction::RemoveSubtask(id) => next.editor.subtasks.retain(|s| s.id != id),
        TasksAction::SaveSubtasks { now } => {
            let Some(task) = state.selected_task() else {
                return next.closed();
            };
            let (updated, _) = replace_subtasks(task, next.editor.subtasks.clone(), now);
            let mut next = next.replace_task(updated).closed();
            next.success_message = Some("Subtasks updated".into());
            return next;
        }

        TasksAction::SubmitCreate | TasksAction::SubmitUpdate => {
            if next.editor.title.trim().is_empty() {
                next.error_message = Some(EMPTY_FIELD.into());
            } else {
                next.error_message = None;
                next.is_loading = true;
            }
        }
        TasksAction::CreateConfirmed { id, xp_reward } => {
            let editor = &state.editor;
            let mut task = Task::new(id, editor.title.clone(), state.due_utc());
            task.description = editor.description.clone();
            task.notes = editor.notes();
            task.subject_id = editor.subject_id.clone();
            task.subject_name = editor.subject_name.clone();
            task.priority = editor.priority;
            task.task_type = editor.task_type;
            task.xp_reward = xp_reward;
            task.subtasks = editor.subtasks.clone();

            let mut tasks = state.tasks.clone();
            tasks.push(task);
            let mut next = next.with_tasks(tasks).closed();
            next.is_loading = false;
            next.success_message = Some(format!("\"{}\" created", editor.title));
            return next;
        }
        TasksAction::UpdateConfirmed { now, xp_reward } => {
            let Some(task) = state.selected_task() else {
                next.is_loading = false;
                return next.closed();
            };
            let editor = &state.editor;
            let mut edited = task.clone();
            edited.title = editor.title.clone();
            edited.description = editor.description.clone();
            edited.notes = editor.notes();
            edited.subject_id = editor.subject_id.clone();
            edited.subject_name = editor.subject_name.clone();
            edited.priority = editor.priority;
            edited.task_type = editor.task_type;
            edited.xp_reward = xp_reward;
            edited.due_at = state.due_utc();
            let (updated, _) = replace_subtasks(&edited, editor.subtasks.clone(), now);

            let mut next = next.replace_task(updated).closed();
            next.is_loading = false;
            next.success_message = Some("Task updated".into());
            return next;
        }
        TasksAction::DeleteConfirmed => {
            let Some(task) = state.selected_task() else {
                return next.closed();
            };
            let title = task.title.clone();
            let tasks = state.tasks.iter().filter(|t| t.id != task.id).cloned().collect();
            let mut next = next.with_tasks(tasks).closed();
            next.success_message = Some(format!("\"{title}\" deleted"));
            return next;
        }

        TasksAction::ToggleTask { id, now } => {
            let Some(task) = state.find(&id) else {
                return next;
            };
            match toggle_task(task, now) {
                Ok((updated, transition)) => {
                    let mut next = next.replace_task(updated);
                    next.success_message = transition.banner();
                    return next;
                }
                Err(e) => next.error_message = Some(e.to_string()),
            }
        }
        TasksAction::ToggleSubtask {
            task_id,
            subtask_id,
            now,
        } => {
            let Some(task) = state.find(&task_id) else {
                return next;
            };
            match toggle_subtask(task, &subtask_id, now) {
                Ok((updated, transition)) => {
                    let mut next = next.replace_task(updated);
                    if let Some(banner) = transition.banner() {
                        next.success_message = Some(banner);
                    }
                    return next;
                }
                Err(e) => next.error_message = Some(e.to_string()),
            }
        }

        TasksAction::ClearSuccess => next.success_message = None,
        TasksAction::ClearError => next.error_message = None,
    }
    next
}
