use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change the app commits produces an Event.
/// Front-ends drain them to show toasts or write logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    LoginSucceeded {
        user_id: String,
        at: DateTime<Utc>,
    },
    LoginFailed {
        email: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },
    Registered {
        email: String,
        at: DateTime<Utc>,
    },
    RecoveryRequested {
        email: String,
        at: DateTime<Utc>,
    },
    ProfileSaved {
        user_id: String,
        at: DateTime<Utc>,
    },
    TaskCreated {
        task_id: String,
        at: DateTime<Utc>,
    },
    TaskUpdated {
        task_id: String,
        at: DateTime<Utc>,
    },
    TaskDeleted {
        task_id: String,
        at: DateTime<Utc>,
    },
    /// Pending → Completed, by direct toggle or because the last subtask was done.
    TaskCompleted {
        task_id: String,
        xp_reward: u32,
        at: DateTime<Utc>,
    },
    /// Completed → Pending.
    TaskReopened {
        task_id: String,
        xp_reward: u32,
        at: DateTime<Utc>,
    },
    /// The signed-in user's XP changed.
    XpChanged {
        user_id: String,
        current_xp: u32,
        total_xp: u32,
        level_up_pending: bool,
        at: DateTime<Utc>,
    },
    SubjectSaved {
        subject_id: String,
        at: DateTime<Utc>,
    },
    SubjectDeleted {
        subject_id: String,
        at: DateTime<Utc>,
    },
    NotificationRead {
        notification_id: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::LoginSucceeded { at, .. }
            | Event::LoginFailed { at, .. }
            | Event::LoggedOut { at }
            | Event::Registered { at, .. }
            | Event::RecoveryRequested { at, .. }
            | Event::ProfileSaved { at, .. }
            | Event::TaskCreated { at, .. }
            | Event::TaskUpdated { at, .. }
            | Event::TaskDeleted { at, .. }
            | Event::TaskCompleted { at, .. }
            | Event::TaskReopened { at, .. }
            | Event::XpChanged { at, .. }
            | Event::SubjectSaved { at, .. }
            | Event::SubjectDeleted { at, .. }
            | Event::NotificationRead { at, .. } => *at,
        }
    }
}
