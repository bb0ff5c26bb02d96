//! Storage seams.
//!
//! The core talks to data through these traits. The only implementations
//! are in memory; nothing here knows about a storage technology.

pub mod fixtures;
pub mod memory;

use crate::error::Result;
use crate::model::{Notification, Subject, Task, User};

pub use memory::{InMemoryNotifications, InMemorySession, InMemorySubjects, InMemoryTasks};

/// Who is signed in.
pub trait SessionProvider {
    fn current_user(&self) -> Option<User>;

    fn set_current_user(&mut self, user: Option<User>);

    fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }
}

pub trait TaskRepository {
    fn list_tasks(&self) -> Result<Vec<Task>>;

    fn get_task(&self, id: &str) -> Result<Option<Task>>;

    /// Insert or replace by id. New tasks go to the end of the list.
    fn save_task(&mut self, task: Task) -> Result<()>;

    /// Remove by id. Returns whether a task was removed.
    fn delete_task(&mut self, id: &str) -> Result<bool>;
}

pub trait SubjectRepository {
    fn list_subjects(&self) -> Result<Vec<Subject>>;

    fn save_subject(&mut self, subject: Subject) -> Result<()>;

    fn delete_subject(&mut self, id: &str) -> Result<bool>;
}

pub trait NotificationRepository {
    fn list_notifications(&self) -> Result<Vec<Notification>>;

    fn save_notification(&mut self, notification: Notification) -> Result<()>;
}
