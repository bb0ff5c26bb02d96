//! XP rewards, the level curve and badge identifiers.
//!
//! The level curve is linear: reaching level `n + 1` from level `n` takes
//! `base_per_level + n * level_increment` XP. Levels are never advanced
//! here; [`XpCalculator::level_up_pending`] only reports that the
//! threshold has been met.

pub mod badges;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::GamificationConfig;
use crate::model::{Priority, User};

pub use badges::Badge;

/// When a task was completed relative to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeliness {
    Early,
    OnTime,
    Late,
}

impl Timeliness {
    /// Classify a completion. Finishing at least `early_threshold` before
    /// the due time is early; finishing by the due time is on time.
    pub fn of(due_at: DateTime<Utc>, completed_at: DateTime<Utc>, early_threshold: Duration) -> Self {
        if completed_at <= due_at - early_threshold {
            Timeliness::Early
        } else if completed_at <= due_at {
            Timeliness::OnTime
        } else {
            Timeliness::Late
        }
    }
}

/// XP arithmetic parameterised by [`GamificationConfig`].
#[derive(Debug, Clone, Default)]
pub struct XpCalculator {
    config: GamificationConfig,
}

impl XpCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GamificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GamificationConfig {
        &self.config
    }

    /// Fixed XP reward for completing a task of the given priority.
    pub fn xp_reward(&self, priority: Priority) -> u32 {
        match priority {
            Priority::Low => self.config.xp_low_priority,
            Priority::Medium => self.config.xp_medium_priority,
            Priority::High => self.config.xp_high_priority,
        }
    }

    /// XP needed to leave `level`.
    pub fn xp_for_next_level(&self, level: u32) -> u32 {
        self.config
            .base_per_level
            .saturating_add(level.saturating_mul(self.config.level_increment))
    }

    /// `current_xp / xp_for_next_level(level)`, clamped to `[0, 1]`.
    pub fn xp_progress(&self, current_xp: u32, level: u32) -> f64 {
        let needed = self.xp_for_next_level(level);
        if needed == 0 {
            return 1.0;
        }
        (current_xp as f64 / needed as f64).clamp(0.0, 1.0)
    }

    pub fn user_progress(&self, user: &User) -> f64 {
        self.xp_progress(user.current_xp, user.current_level)
    }

    pub fn multiplier(&self, timeliness: Timeliness) -> f64 {
        match timeliness {
            Timeliness::Early => self.config.multiplier_early,
            Timeliness::OnTime => self.config.multiplier_on_time,
            Timeliness::Late => self.config.multiplier_late,
        }
    }

    /// Scale a base reward by timeliness, rounding to the nearest point.
    pub fn xp_with_timeliness(&self, base: u32, timeliness: Timeliness) -> u32 {
        (base as f64 * self.multiplier(timeliness)).round().max(0.0) as u32
    }

    pub fn timeliness(&self, due_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> Timeliness {
        Timeliness::of(
            due_at,
            completed_at,
            Duration::hours(self.config.early_threshold_hours),
        )
    }

    /// Copy of `user` with `xp` added to both the level and lifetime totals.
    pub fn award_xp(&self, user: &User, xp: u32) -> User {
        let mut updated = user.clone();
        updated.current_xp = updated.current_xp.saturating_add(xp);
        updated.total_xp = updated.total_xp.saturating_add(xp);
        tracing::debug!(
            user = %user.id,
            xp,
            current_xp = updated.current_xp,
            "awarded xp"
        );
        updated
    }

    /// Copy of `user` with `xp` taken back, never going below zero.
    pub fn revoke_xp(&self, user: &User, xp: u32) -> User {
        let mut updated = user.clone();
        updated.current_xp = updated.current_xp.saturating_sub(xp);
        updated.total_xp = updated.total_xp.saturating_sub(xp);
        tracing::debug!(
            user = %user.id,
            xp,
            current_xp = updated.current_xp,
            "revoked xp"
        );
        updated
    }

    /// The user has enough XP to leave their level (and is below the cap).
    pub fn level_up_pending(&self, user: &User) -> bool {
        user.current_level < self.config.max_level
            && user.current_xp >= self.xp_for_next_level(user.current_level)
    }
}

/// [`XpCalculator::xp_reward`] with default settings.
pub fn xp_reward(priority: Priority) -> u32 {
    XpCalculator::new().xp_reward(priority)
}

/// [`XpCalculator::xp_for_next_level`] with default settings.
pub fn xp_for_next_level(level: u32) -> u32 {
    XpCalculator::new().xp_for_next_level(level)
}

/// [`XpCalculator::xp_progress`] with default settings.
pub fn xp_progress(current_xp: u32, level: u32) -> f64 {
    XpCalculator::new().xp_progress(current_xp, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn demo_user() -> User {
        let mut user = User::new("1", "Alex Roldan", "alex@upp.edu.mx");
        user.current_level = 5;
        user.current_xp = 300;
        user.total_xp = 850;
        user
    }

    #[test]
    fn reward_by_priority() {
        assert_eq!(xp_reward(Priority::Low), 10);
        assert_eq!(xp_reward(Priority::Medium), 25);
        assert_eq!(xp_reward(Priority::High), 50);
    }

    #[test]
    fn level_curve_is_linear() {
        assert_eq!(xp_for_next_level(1), 150);
        assert_eq!(xp_for_next_level(5), 350);
    }

    #[test]
    fn progress_is_clamped_and_exact_at_boundary() {
        assert_eq!(xp_progress(350, 5), 1.0);
        assert_eq!(xp_progress(700, 5), 1.0);
        assert_eq!(xp_progress(0, 5), 0.0);
        assert!((xp_progress(175, 5) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_curve() {
        let calc = XpCalculator::with_config(GamificationConfig {
            base_per_level: 200,
            level_increment: 100,
            ..Default::default()
        });
        assert_eq!(calc.xp_for_next_level(2), 400);
    }

    #[test]
    fn award_and_revoke_never_change_level() {
        let calc = XpCalculator::new();
        let user = demo_user();
        let awarded = calc.award_xp(&user, 50);
        assert_eq!(awarded.current_xp, 350);
        assert_eq!(awarded.total_xp, 900);
        assert_eq!(awarded.current_level, 5);
        assert!(calc.level_up_pending(&awarded));
        assert!(!calc.level_up_pending(&user));

        let revoked = calc.revoke_xp(&awarded, 1000);
        assert_eq!(revoked.current_xp, 0);
        assert_eq!(revoked.total_xp, 0);
    }

    #[test]
    fn no_level_up_at_cap() {
        let calc = XpCalculator::new();
        let mut user = demo_user();
        user.current_level = 50;
        user.current_xp = 10_000;
        assert!(!calc.level_up_pending(&user));
    }

    #[test]
    fn timeliness_classification() {
        let calc = XpCalculator::new();
        let due = Utc.with_ymd_and_hms(2026, 10, 16, 23, 0, 0).unwrap();
        assert_eq!(calc.timeliness(due, due - Duration::hours(30)), Timeliness::Early);
        assert_eq!(calc.timeliness(due, due - Duration::hours(2)), Timeliness::OnTime);
        assert_eq!(calc.timeliness(due, due), Timeliness::OnTime);
        assert_eq!(calc.timeliness(due, due + Duration::minutes(1)), Timeliness::Late);
    }

    #[test]
    fn timeliness_multipliers() {
        let calc = XpCalculator::new();
        assert_eq!(calc.xp_with_timeliness(50, Timeliness::Early), 75);
        assert_eq!(calc.xp_with_timeliness(50, Timeliness::OnTime), 50);
        assert_eq!(calc.xp_with_timeliness(25, Timeliness::Late), 13);
    }
}
