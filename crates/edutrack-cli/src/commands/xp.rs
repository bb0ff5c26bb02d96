use clap::Subcommand;
use edutrack_core::{Config, Priority, XpCalculator};
use serde_json::json;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum XpAction {
    /// XP awarded for completing a task of this priority
    Reward {
        /// low, medium or high
        priority: Priority,
    },
    /// XP needed to leave a level
    NextLevel { level: u32 },
    /// Fraction of the current level completed
    Progress { current_xp: u32, level: u32 },
}

pub fn run(action: XpAction) -> CmdResult {
    let xp = XpCalculator::with_config(Config::load_or_default().gamification);
    match action {
        XpAction::Reward { priority } => print_json(&json!({
            "priority": priority,
            "xp_reward": xp.xp_reward(priority),
        })),
        XpAction::NextLevel { level } => print_json(&json!({
            "level": level,
            "xp_for_next_level": xp.xp_for_next_level(level),
        })),
        XpAction::Progress { current_xp, level } => print_json(&json!({
            "current_xp": current_xp,
            "level": level,
            "xp_for_next_level": xp.xp_for_next_level(level),
            "progress": xp.xp_progress(current_xp, level),
        })),
    }
}
