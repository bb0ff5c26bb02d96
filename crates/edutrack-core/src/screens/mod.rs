//! Screen state holders.
//!
//! Each screen has an immutable state record, an action enum and a pure
//! `reduce(&State, Action) -> State`. Anything that needs the clock, ids,
//! configuration or simulated latency is resolved by [`crate::app::App`]
//! and passed in through the action.

pub mod calendar;
pub mod home;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod recovery;
pub mod register;
pub mod subjects;
pub mod tasks;

use chrono::{FixedOffset, Offset, Utc};

pub(crate) const EMPTY_FIELD: &str = "This field cannot be empty";

/// UTC offset from minutes, falling back to UTC when out of range.
pub(crate) fn fixed_offset(minutes: i32) -> FixedOffset {
    FixedOffset::east_opt(minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix())
}
