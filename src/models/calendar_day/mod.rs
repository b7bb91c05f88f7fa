// Calendar day module
// One cell of the month grid

use chrono::NaiveDate;

/// A single cell in the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_of_month: u32,
    /// Whether the day belongs to the displayed month (vs. leading/trailing days).
    pub is_current_month: bool,
    pub is_today: bool,
    /// `YYYY-MM-DD`, stable key for joining with events.
    pub iso: String,
}
