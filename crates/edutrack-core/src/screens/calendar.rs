//! Month view with per-day task dots and the selected day's agenda.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::fixed_offset;
use crate::model::Task;
use crate::task::calendar::{shift_month, tasks_on_day, MonthGrid};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub selected_date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub all_tasks: Vec<Task>,
    pub tasks_for_selected_date: Vec<Task>,
    pub grid: Option<MonthGrid>,
    pub utc_offset_minutes: i32,
}

impl CalendarState {
    /// Empty calendar showing `today`'s month.
    pub fn new(today: NaiveDate, utc_offset_minutes: i32) -> Self {
        CalendarState {
            selected_date: today,
            year: today.year(),
            month: today.month(),
            all_tasks: Vec::new(),
            tasks_for_selected_date: Vec::new(),
            grid: None,
            utc_offset_minutes,
        }
        .recomputed()
    }

    fn recomputed(mut self) -> Self {
        let tz = fixed_offset(self.utc_offset_minutes);
        self.tasks_for_selected_date = tasks_on_day(&self.all_tasks, self.selected_date, &tz);
        self.grid = MonthGrid::build(&self.all_tasks, self.year, self.month, &tz);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    TasksLoaded(Vec<Task>),
    DateSelected(NaiveDate),
    /// Move the visible month forward (positive) or back (negative).
    MonthShifted(i32),
}

pub fn reduce(state: &CalendarState, action: CalendarAction) -> CalendarState {
    let next = match action {
        CalendarAction::TasksLoaded(all_tasks) => CalendarState {
            all_tasks,
            ..state.clone()
        },
        CalendarAction::DateSelected(selected_date) => CalendarState {
            selected_date,
            ..state.clone()
        },
        CalendarAction::MonthShifted(delta) => {
            let Some((year, month)) = shift_month(state.year, state.month, delta) else {
                return state.clone();
            };
            CalendarState {
                year,
                month,
                ..state.clone()
            }
        }
    };
    next.recomputed()
}
