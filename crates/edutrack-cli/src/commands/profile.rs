use clap::Subcommand;
use edutrack_core::{Badge, CoreError};
use serde_json::json;

use super::{demo_app, print_json, CmdResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the demo user with level progress and badges
    Show,
}

pub fn run(action: ProfileAction) -> CmdResult {
    let app = demo_app()?;
    match action {
        ProfileAction::Show => {
            let home = app.home().ok_or(CoreError::NotSignedIn)?;
            let badges: Vec<_> = Badge::ALL
                .iter()
                .filter(|b| home.user.has_badge(b.id()))
                .map(|b| json!({ "id": b.id(), "title": b.title() }))
                .collect();
            print_json(&json!({
                "user": home.user,
                "xp_for_next_level": home.xp_for_next_level,
                "xp_progress": home.xp_progress,
                "level_up_pending": app.xp().level_up_pending(&home.user),
                "badges": badges,
            }))
        }
    }
}
