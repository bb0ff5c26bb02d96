//! Domain records. Every update replaces the whole value.

pub mod notification;
pub mod subject;
pub mod task;
pub mod user;

pub use notification::{unread_count, Notification, NotificationKind};
pub use subject::{ColorOption, Subject, SubjectColor};
pub use task::{Priority, Subtask, Task, TaskType};
pub use user::User;

/// Fresh identifier for entities created by user action.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
