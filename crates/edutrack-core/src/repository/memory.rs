//! Vec-backed repositories. Order of insertion is preserved.

use super::{NotificationRepository, SessionProvider, SubjectRepository, TaskRepository};
use crate::error::Result;
use crate::model::{Notification, Subject, Task, User};

fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) {
    match items.iter_mut().find(|existing| same(existing, &item)) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

fn remove<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !matches(item));
    items.len() != before
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    user: Option<User>,
}

impl InMemorySession {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }
}

impl SessionProvider for InMemorySession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn set_current_user(&mut self, user: Option<User>) {
        tracing::debug!(user = ?user.as_ref().map(|u| &u.id), "session user changed");
        self.user = user;
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTasks {
    tasks: Vec<Task>,
}

impl InMemoryTasks {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl TaskRepository for InMemoryTasks {
    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn get_task(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.iter().find(|t| t.id == id).cloned())
    }

    fn save_task(&mut self, task: Task) -> Result<()> {
        upsert(&mut self.tasks, task, |a, b| a.id == b.id);
        Ok(())
    }

    fn delete_task(&mut self, id: &str) -> Result<bool> {
        Ok(remove(&mut self.tasks, |t| t.id == id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySubjects {
    subjects: Vec<Subject>,
}

impl InMemorySubjects {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }
}

impl SubjectRepository for InMemorySubjects {
    fn list_subjects(&self) -> Result<Vec<Subject>> {
        Ok(self.subjects.clone())
    }

    fn save_subject(&mut self, subject: Subject) -> Result<()> {
        upsert(&mut self.subjects, subject, |a, b| a.id == b.id);
        Ok(())
    }

    fn delete_subject(&mut self, id: &str) -> Result<bool> {
        Ok(remove(&mut self.subjects, |s| s.id == id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifications {
    notifications: Vec<Notification>,
}

impl InMemoryNotifications {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }
}

impl NotificationRepository for InMemoryNotifications {
    fn list_notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.clone())
    }

    fn save_notification(&mut self, notification: Notification) -> Result<()> {
        upsert(&mut self.notifications, notification, |a, b| a.id == b.id);
        Ok(())
    }
}
