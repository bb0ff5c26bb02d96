//! Subjects (courses) and their colour palette.

use serde::{Deserialize, Serialize};

/// A course the student is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// `#RRGGBB`
    pub color: String,
    #[serde(default)]
    pub professor_name: Option<String>,
    #[serde(default)]
    pub classroom: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
}

impl Subject {
    /// Completed share of tracked tasks, as a percentage.
    pub fn progress_percentage(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            self.completed_tasks as f64 / self.total_tasks as f64 * 100.0
        }
    }
}

/// One selectable palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Fixed palette offered when creating a subject.
pub struct SubjectColor;

impl SubjectColor {
    pub const RED: u32 = 0xFF6B6B;

    pub const PALETTE: [ColorOption; 12] = [
        ColorOption { name: "Red", hex: "#FF6B6B" },
        ColorOption { name: "Orange", hex: "#FFB366" },
        ColorOption { name: "Yellow", hex: "#FFE66D" },
        ColorOption { name: "Green", hex: "#4ECDC4" },
        ColorOption { name: "Blue", hex: "#6C5CE7" },
        ColorOption { name: "Purple", hex: "#A29BFE" },
        ColorOption { name: "Pink", hex: "#FF85A2" },
        ColorOption { name: "Teal", hex: "#00CEC9" },
        ColorOption { name: "Indigo", hex: "#5F27CD" },
        ColorOption { name: "Lime", hex: "#B8E986" },
        ColorOption { name: "Cyan", hex: "#00D2D3" },
        ColorOption { name: "Magenta", hex: "#E056FD" },
    ];

    /// Parse `#RRGGBB` (leading `#` optional) into a 24-bit RGB value.
    ///
    /// Unparseable input falls back to red.
    pub fn from_hex(hex: &str) -> u32 {
        let clean = hex.trim_start_matches('#');
        if clean.len() != 6 {
            return Self::RED;
        }
        u32::from_str_radix(clean, 16).unwrap_or(Self::RED)
    }

    pub fn to_hex(rgb: u32) -> String {
        format!("#{:06X}", rgb & 0xFF_FFFF)
    }

    /// Display name for a palette colour, or the hex string itself.
    pub fn name_for_hex(hex: &str) -> String {
        Self::PALETTE
            .iter()
            .find(|opt| opt.hex.eq_ignore_ascii_case(hex))
            .map(|opt| opt.name.to_string())
            .unwrap_or_else(|| hex.to_string())
    }
}
