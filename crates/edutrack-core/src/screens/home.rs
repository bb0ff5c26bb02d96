//! Dashboard: XP bar, weekly progress, upcoming tasks, subjects.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::gamification::XpCalculator;
use crate::model::{Subject, Task, User};
use crate::task::filter::upcoming_tasks;
use crate::task::week::{weekly_progress, WeeklyProgress};

pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeState {
    pub user: User,
    pub upcoming_tasks: Vec<Task>,
    pub recent_subjects: Vec<Subject>,
    pub week: WeeklyProgress,
    pub xp_for_next_level: u32,
    pub xp_progress: f64,
}

/// Everything the dashboard derives from.
#[derive(Debug, Clone)]
pub struct HomeSnapshot {
    pub user: User,
    pub tasks: Vec<Task>,
    pub subjects: Vec<Subject>,
    pub now: DateTime<FixedOffset>,
}

impl HomeState {
    pub fn build(snapshot: HomeSnapshot, xp: &XpCalculator) -> Self {
        let now_utc = snapshot.now.with_timezone(&Utc);
        HomeState {
            upcoming_tasks: upcoming_tasks(&snapshot.tasks, now_utc, UPCOMING_LIMIT),
            week: weekly_progress(&snapshot.tasks, &snapshot.now),
            xp_for_next_level: xp.xp_for_next_level(snapshot.user.current_level),
            xp_progress: xp.user_progress(&snapshot.user),
            recent_subjects: snapshot.subjects,
            user: snapshot.user,
        }
    }
}

#[derive(Debug, Clone)]
pub enum HomeAction {
    Refresh(HomeSnapshot),
}

/// The dashboard only ever refreshes wholesale.
pub fn reduce(_state: &HomeState, action: HomeAction, xp: &XpCalculator) -> HomeState {
    match action {
        HomeAction::Refresh(snapshot) => HomeState::build(snapshot, xp),
    }
}
