//! Current-week window and completion statistics.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Task;

/// Monday 00:00:00 up to and including Sunday 23:59:59, in some time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    /// Start of the following Monday; not part of the window.
    pub next_start: DateTime<Utc>,
}

impl WeekWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.next_start
    }

    /// Last whole second of the window (Sunday 23:59:59).
    pub fn end(&self) -> DateTime<Utc> {
        self.next_start - Duration::seconds(1)
    }
}

/// Completed vs. total tasks due this week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub completed: usize,
    pub total: usize,
    /// `completed / total`, or 0 for an empty week.
    pub ratio: f64,
}

/// Resolve a local wall-clock time in `tz` to UTC.
///
/// Ambiguous times take the earlier instant; times skipped by a DST jump
/// move forward an hour.
pub(crate) fn local_to_utc<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

pub(crate) fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    local_to_utc(tz, date.and_time(chrono::NaiveTime::MIN))
}

/// The Monday-to-Sunday week containing `now`, in `now`'s time zone.
pub fn week_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> WeekWindow {
    let tz = now.timezone();
    let today = now.date_naive();
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    WeekWindow {
        start: start_of_day(&tz, monday),
        next_start: start_of_day(&tz, monday + Duration::days(7)),
    }
}

/// Tasks due within the week containing `now`, in input order.
pub fn weekly_tasks<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Vec<Task> {
    let window = week_bounds(now);
    tasks
        .iter()
        .filter(|t| window.contains(t.due_at))
        .cloned()
        .collect()
}

pub fn weekly_progress<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> WeeklyProgress {
    let weekly = weekly_tasks(tasks, now);
    let total = weekly.len();
    let completed = weekly.iter().filter(|t| t.completed).count();
    let ratio = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    };
    WeeklyProgress {
        completed,
        total,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn wednesday() -> DateTime<Utc> {
        // 2026-10-14 is a Wednesday.
        Utc.with_ymd_and_hms(2026, 10, 14, 15, 30, 0).unwrap()
    }

    fn due(id: &str, at: DateTime<Utc>, completed: bool) -> Task {
        let mut task = Task::new(id, id, at);
        task.completed = completed;
        task
    }

    #[test]
    fn bounds_span_monday_to_sunday() {
        let window = week_bounds(&wednesday());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 10, 12, 0, 0, 0).unwrap());
        assert_eq!(window.end(), Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 59).unwrap());
    }

    #[test]
    fn monday_and_sunday_now_stay_in_same_week() {
        let monday = Utc.with_ymd_and_hms(2026, 10, 12, 0, 0, 0).unwrap();
        let sunday = Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 59).unwrap();
        assert_eq!(week_bounds(&monday), week_bounds(&sunday));
    }

    #[test]
    fn includes_this_week_excludes_thirty_days_out() {
        let now = wednesday();
        let tasks = vec![
            due("wed", now, false),
            due("far", now + Duration::days(30), false),
            due("sun-edge", Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 59).unwrap(), false),
            due("next-mon", Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap(), false),
        ];
        let ids: Vec<_> = weekly_tasks(&tasks, &now).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, ["wed", "sun-edge"]);
    }

    #[test]
    fn window_follows_time_zone() {
        // 2026-10-12 03:00 UTC is still Sunday evening at UTC-6.
        let tz = FixedOffset::west_opt(6 * 3600).unwrap();
        let now = wednesday().with_timezone(&tz);
        let late_sunday = Utc.with_ymd_and_hms(2026, 10, 12, 3, 0, 0).unwrap();
        let window = week_bounds(&now);
        assert!(!window.contains(late_sunday));
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 10, 12, 6, 0, 0).unwrap());
    }

    #[test]
    fn progress_ratio() {
        let now = wednesday();
        let tasks = vec![
            due("a", now, true),
            due("b", now + Duration::hours(1), false),
            due("c", now + Duration::hours(2), true),
            due("d", now + Duration::days(40), true),
        ];
        let progress = weekly_progress(&tasks, &now);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 3);
        assert!((progress.ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_week_is_zero() {
        let progress = weekly_progress(&[], &wednesday());
        assert_eq!(progress.total, 0);
        assert_eq!(progress.ratio, 0.0);
    }
}
