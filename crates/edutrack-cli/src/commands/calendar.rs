use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use edutrack_core::screens::calendar::CalendarAction as Calendar;
use serde_json::json;

use super::{demo_app, print_json, CmdResult};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Month grid with per-day task counts
    Month {
        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// 1-12, defaults to the current month
        #[arg(long)]
        month: Option<u32>,
    },
    /// Tasks due on one day
    Day {
        /// YYYY-MM-DD
        date: NaiveDate,
    },
}

pub fn run(action: CalendarAction) -> CmdResult {
    let mut app = demo_app()?;
    match action {
        CalendarAction::Month { year, month } => {
            let current = app.calendar();
            let year = year.unwrap_or(current.year);
            let month = month.unwrap_or(current.month);
            if !(1..=12).contains(&month) {
                return Err(format!("month must be between 1 and 12, got {month}").into());
            }
            if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
                return Err(format!("year {year} is out of the supported calendar range").into());
            }
            let delta = (i64::from(year) - i64::from(current.year)) * 12 + i64::from(month)
                - i64::from(current.month);
            let delta = i32::try_from(delta)
                .map_err(|_| format!("{year}-{month:02} is too far from the current month"))?;
            tracing::debug!(year, month, delta, "shifting calendar");

            let state = app.dispatch_calendar(Calendar::MonthShifted(delta));
            match &state.grid {
                Some(grid) if (state.year, state.month) == (year, month) => print_json(grid),
                _ => Err(format!("no month grid for {year}-{month:02}").into()),
            }
        }
        CalendarAction::Day { date } => {
            let state = app.dispatch_calendar(Calendar::DateSelected(date));
            print_json(&json!({
                "date": date,
                "weekday": date.weekday().to_string(),
                "tasks": state.tasks_for_selected_date,
            }))
        }
    }
}
