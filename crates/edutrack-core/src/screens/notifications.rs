//! Notification inbox.

use serde::{Deserialize, Serialize};

use crate::model::{unread_count, Notification};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsState {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationsAction {
    Loaded(Vec<Notification>),
    MarkAsRead(String),
    MarkAllAsRead,
}

pub fn reduce(state: &NotificationsState, action: NotificationsAction) -> NotificationsState {
    let notifications = match action {
        NotificationsAction::Loaded(notifications) => notifications,
        NotificationsAction::MarkAsRead(id) => state
            .notifications
            .iter()
            .map(|n| {
                if n.id == id {
                    Notification {
                        read: true,
                        ..n.clone()
                    }
                } else {
                    n.clone()
                }
            })
            .collect(),
        NotificationsAction::MarkAllAsRead => state
            .notifications
            .iter()
            .map(|n| Notification {
                read: true,
                ..n.clone()
            })
            .collect(),
    };
    NotificationsState {
        unread_count: unread_count(&notifications),
        notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;
    use chrono::Utc;

    fn loaded() -> NotificationsState {
        reduce(
            &NotificationsState::default(),
            NotificationsAction::Loaded(fixtures::notifications(Utc::now())),
        )
    }

    #[test]
    fn unread_count_tracks_reads() {
        let state = loaded();
        assert_eq!(state.unread_count, 2);
        let state = reduce(&state, NotificationsAction::MarkAsRead("1".into()));
        assert_eq!(state.unread_count, 1);
        let state = reduce(&state, NotificationsAction::MarkAsRead("1".into()));
        assert_eq!(state.unread_count, 1);
        let state = reduce(&state, NotificationsAction::MarkAllAsRead);
        assert_eq!(state.unread_count, 0);
        assert!(state.notifications.iter().all(|n| n.read));
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let state = loaded();
        assert_eq!(reduce(&state, NotificationsAction::MarkAsRead("99".into())), state);
    }
}
