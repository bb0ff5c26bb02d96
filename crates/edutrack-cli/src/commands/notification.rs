use clap::Subcommand;
use edutrack_core::screens::notifications::NotificationsAction;
use edutrack_core::CoreError;

use super::{demo_app, print_json, CmdResult};

#[derive(Subcommand)]
pub enum NotificationAction {
    /// List notifications with the unread count
    List,
    /// Mark one notification as read
    Read {
        /// Notification ID
        id: String,
    },
    /// Mark every notification as read
    ReadAll,
}

pub fn run(action: NotificationAction) -> CmdResult {
    let mut app = demo_app()?;
    let state = match action {
        NotificationAction::List => app.notifications(),
        NotificationAction::Read { id } => {
            if !app.notifications().notifications.iter().any(|n| n.id == id) {
                return Err(CoreError::NotFound {
                    kind: "Notification",
                    id,
                }
                .into());
            }
            app.dispatch_notifications(NotificationsAction::MarkAsRead(id))?
        }
        NotificationAction::ReadAll => app.dispatch_notifications(NotificationsAction::MarkAllAsRead)?,
    };
    print_json(state)
}
