//! Badge catalogue. Users store badge ids as plain strings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    FirstTask,
    PerfectWeek,
    EarlyBird,
    Speedrun,
    Century,
    HalfCentury,
    Dedication,
}

impl Badge {
    pub const ALL: [Badge; 7] = [
        Badge::FirstTask,
        Badge::PerfectWeek,
        Badge::EarlyBird,
        Badge::Speedrun,
        Badge::Century,
        Badge::HalfCentury,
        Badge::Dedication,
    ];

    /// Identifier stored in [`crate::model::User::badges`].
    pub fn id(&self) -> &'static str {
        match self {
            Badge::FirstTask => "first_task",
            Badge::PerfectWeek => "perfect_week",
            Badge::EarlyBird => "early_bird",
            Badge::Speedrun => "speedrun",
            Badge::Century => "century",
            Badge::HalfCentury => "half_century",
            Badge::Dedication => "dedication",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Badge::FirstTask => "First task",
            Badge::PerfectWeek => "Perfect week",
            Badge::EarlyBird => "Early bird",
            Badge::Speedrun => "Speedrun",
            Badge::Century => "Century",
            Badge::HalfCentury => "Half century",
            Badge::Dedication => "Dedication",
        }
    }
}

impl FromStr for Badge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Badge::ALL
            .into_iter()
            .find(|b| b.id() == s)
            .ok_or_else(|| format!("unknown badge: {s}"))
    }
}
