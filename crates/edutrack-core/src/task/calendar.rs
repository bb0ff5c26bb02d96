//! Calendar bucketing: dots per day for a month, task list for a day.

use chrono::{Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Task;

/// Day-of-month → number of tasks due that day, for one month in `tz`.
pub fn tasks_per_day<Tz: TimeZone>(
    tasks: &[Task],
    year: i32,
    month: u32,
    tz: &Tz,
) -> BTreeMap<u32, usize> {
    let mut per_day = BTreeMap::new();
    for task in tasks {
        let local = task.due_at.with_timezone(tz).date_naive();
        if local.year() == year && local.month() == month {
            *per_day.entry(local.day()).or_insert(0) += 1;
        }
    }
    per_day
}

/// Tasks whose due date falls on `date` in `tz`, in input order.
///
/// Matching is by calendar date, not by a 24h window around `date`.
pub fn tasks_on_day<Tz: TimeZone>(tasks: &[Task], date: NaiveDate, tz: &Tz) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.due_at.with_timezone(tz).date_naive() == date)
        .cloned()
        .collect()
}

/// Layout of a Sunday-first month grid with task counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1 (0 when the month starts on Sunday).
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub task_counts: BTreeMap<u32, usize>,
}

impl MonthGrid {
    /// Build the grid, or `None` for an invalid year/month.
    pub fn build<Tz: TimeZone>(tasks: &[Task], year: i32, month: u32, tz: &Tz) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = shift_month(year, month, 1)?;
        let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
        Some(MonthGrid {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days_in_month: next_first.signed_duration_since(first).num_days() as u32,
            task_counts: tasks_per_day(tasks, year, month, tz),
        })
    }

    pub fn cell_count(&self) -> u32 {
        self.leading_blanks + self.days_in_month
    }

    /// Day of month shown in grid cell `index`, if any.
    pub fn day_at(&self, index: u32) -> Option<u32> {
        let day = index.checked_sub(self.leading_blanks)? + 1;
        (day <= self.days_in_month).then_some(day)
    }
}

/// Move `delta` months from (year, month), wrapping across years.
///
/// `None` when `month` is not 1-12 or the result leaves the range a
/// `NaiveDate` can represent.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let zero_based = i64::from(year) * 12 + i64::from(month - 1) + i64::from(delta);
    let year = i32::try_from(zero_based.div_euclid(12)).ok()?;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).map(|_| (year, month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn due(id: &str, y: i32, m: u32, d: u32, h: u32) -> Task {
        Task::new(id, id, Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn sample() -> Vec<Task> {
        vec![
            due("a", 2026, 10, 15, 9),
            due("b", 2026, 10, 15, 23),
            due("c", 2026, 10, 16, 1),
            due("d", 2026, 11, 13, 12),
            due("e", 2025, 10, 15, 12),
        ]
    }

    #[test]
    fn counts_per_day_within_month_and_year() {
        let counts = tasks_per_day(&sample(), 2026, 10, &Utc);
        assert_eq!(counts.get(&15), Some(&2));
        assert_eq!(counts.get(&16), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn day_match_uses_calendar_date() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let ids: Vec<_> = tasks_on_day(&sample(), day, &Utc)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn time_zone_moves_late_tasks_across_days() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let counts = tasks_per_day(&sample(), 2026, 10, &tz);
        assert_eq!(counts.get(&15), Some(&1));
        assert_eq!(counts.get(&16), Some(&2));
    }

    #[test]
    fn grid_layout() {
        // October 2026 starts on a Thursday.
        let grid = MonthGrid::build(&sample(), 2026, 10, &Utc).unwrap();
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days_in_month, 31);
        assert_eq!(grid.cell_count(), 35);
        assert_eq!(grid.day_at(3), None);
        assert_eq!(grid.day_at(4), Some(1));
        assert_eq!(grid.day_at(34), Some(31));
        assert_eq!(grid.day_at(35), None);

        let feb = MonthGrid::build(&[], 2028, 2, &Utc).unwrap();
        assert_eq!(feb.days_in_month, 29);
        assert!(MonthGrid::build(&[], 2026, 13, &Utc).is_none());
    }

    #[test]
    fn month_navigation_wraps() {
        assert_eq!(shift_month(2026, 12, 1), Some((2027, 1)));
        assert_eq!(shift_month(2026, 1, -1), Some((2025, 12)));
        assert_eq!(shift_month(2026, 10, 0), Some((2026, 10)));
        assert_eq!(shift_month(2026, 10, -25), Some((2024, 9)));
    }

    #[test]
    fn month_navigation_stops_at_representable_dates() {
        assert_eq!(shift_month(2026, 10, i32::MAX), None);
        assert_eq!(shift_month(2026, 10, i32::MIN), None);
        assert_eq!(shift_month(i32::MAX, 12, 1), None);
        assert_eq!(shift_month(2026, 13, 0), None);

        let last = NaiveDate::MAX;
        assert_eq!(shift_month(last.year(), last.month(), 0), Some((last.year(), last.month())));
        assert_eq!(shift_month(last.year(), last.month(), 1), None);
        // December of the last year has no following month to measure against.
        assert!(MonthGrid::build(&[], last.year(), last.month(), &Utc).is_none());
    }
}
