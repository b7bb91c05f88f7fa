//! Month grid builder.
//!
//! Always produces six Sunday-first weeks, padding the displayed month with
//! trailing days of the previous month and leading days of the next.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::calendar_day::CalendarDay;
use crate::models::view_month::ViewMonth;
use crate::utils::date::{first_of_month, is_same_day, to_iso_date, today};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Six rows of seven days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    weeks: Vec<Vec<CalendarDay>>,
}

impl CalendarGrid {
    pub fn weeks(&self) -> &[Vec<CalendarDay>] {
        &self.weeks
    }

    /// All 42 cells in display order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    pub fn find(&self, iso: &str) -> Option<&CalendarDay> {
        self.days().find(|day| day.iso == iso)
    }

    pub fn first_day(&self) -> Option<&CalendarDay> {
        self.days().next()
    }

    pub fn last_day(&self) -> Option<&CalendarDay> {
        self.days().last()
    }

    pub fn into_weeks(self) -> Vec<Vec<CalendarDay>> {
        self.weeks
    }
}

/// Build the grid for `year`/`month0`, marking today from the local clock.
pub fn calendar_weeks(year: i32, month0: i32) -> CalendarGrid {
    calendar_weeks_at(year, month0, today())
}

/// Build the grid with an explicit "today".
///
/// `month0` is zero-based and may be out of range; it is normalized into the
/// neighbouring year.
pub fn calendar_weeks_at(year: i32, month0: i32, today: NaiveDate) -> CalendarGrid {
    let view = ViewMonth::new(year, month0);
    grid_for(view, today)
}

/// Build the grid for a view. Years outside the supported range are clamped.
pub fn grid_for(view: ViewMonth, today: NaiveDate) -> CalendarGrid {
    let view = ViewMonth::new(view.year, view.month0 as i32);
    // Clamped years keep the neighbouring months representable.
    let first = first_of_month(view.year, view.month0 as i32).unwrap_or(NaiveDate::MIN);
    let start_dow = first.weekday().num_days_from_sunday() as i64;
    let anchor = first
        .checked_sub_signed(Duration::days(start_dow))
        .unwrap_or(first);

    let mut weeks = Vec::with_capacity(WEEKS_PER_GRID);
    let mut week = Vec::with_capacity(DAYS_PER_WEEK);

    for offset in 0..CELLS_PER_GRID as i64 {
        let date = anchor
            .checked_add_signed(Duration::days(offset))
            .unwrap_or(NaiveDate::MAX);
        week.push(CalendarDay {
            date,
            day_of_month: date.day(),
            is_current_month: date.month0() == view.month0 && date.year() == view.year,
            is_today: is_same_day(&date, &today),
            iso: to_iso_date(date),
        });

        if week.len() == DAYS_PER_WEEK {
            weeks.push(std::mem::replace(&mut week, Vec::with_capacity(DAYS_PER_WEEK)));
        }
    }

    CalendarGrid { weeks }
}
