//! Student profile with gamification counters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub career: String,
    #[serde(default)]
    pub age: u32,
    /// Always at least 1.
    pub current_level: u32,
    /// XP earned within the current level.
    pub current_xp: u32,
    /// Lifetime XP.
    pub total_xp: u32,
    pub current_streak: u32,
    #[serde(default)]
    pub badges: BTreeSet<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            university: String::new(),
            career: String::new(),
            age: 0,
            current_level: 1,
            current_xp: 0,
            total_xp: 0,
            current_streak: 0,
            badges: BTreeSet::new(),
        }
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.contains(badge_id)
    }
}
