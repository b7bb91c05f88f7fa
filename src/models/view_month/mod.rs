//! The month currently on screen.
//!
//! This is the only piece of state the calendar keeps between renders. The
//! grid, the per-day events and the month list are all recomputed from it.

use chrono::{Datelike, NaiveDate};

use crate::utils::date::{month_name, normalize_month};

/// A displayed (year, zero-based month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewMonth {
    pub year: i32,
    /// 0 = January, 11 = December.
    pub month0: u32,
}

/// Navigation requests from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Previous,
    Next,
    Today,
}

impl ViewMonth {
    /// Build from a possibly out-of-range month index (e.g. 12 → January next year).
    pub fn new(year: i32, month0: i32) -> Self {
        let (year, month0) = normalize_month(year, month0);
        Self { year, month0 }
    }

    /// The month containing `date`, clamped to the supported years.
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() as i32)
    }

    pub fn offset(self, months: i32) -> Self {
        Self::new(self.year, (self.month0 as i32).saturating_add(months))
    }

    pub fn previous(self) -> Self {
        self.offset(-1)
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    /// Apply a navigation intent. `today` decides where `Today` lands.
    pub fn apply(self, intent: NavIntent, today: NaiveDate) -> Self {
        match intent {
            NavIntent::Previous => self.previous(),
            NavIntent::Next => self.next(),
            NavIntent::Today => Self::containing(today),
        }
    }

    pub fn month_name(self) -> &'static str {
        month_name(self.month0)
    }

    /// "September 2025"
    pub fn title(self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewMonth::new(2025, 0), NavIntent::Previous, ViewMonth::new(2024, 11); "previous wraps year")]
    #[test_case(ViewMonth::new(2025, 11), NavIntent::Next, ViewMonth::new(2026, 0); "next wraps year")]
    #[test_case(ViewMonth::new(2025, 5), NavIntent::Next, ViewMonth::new(2025, 6); "next in year")]
    #[test_case(ViewMonth::new(1999, 3), NavIntent::Today, ViewMonth::new(2025, 8); "today jumps")]
    fn test_apply(start: ViewMonth, intent: NavIntent, expected: ViewMonth) {
        assert_eq!(start.apply(intent, date(2025, 9, 17)), expected);
    }

    #[test]
    fn test_new_normalizes() {
        assert_eq!(ViewMonth::new(2025, 12), ViewMonth { year: 2026, month0: 0 });
        assert_eq!(ViewMonth::new(2025, -13), ViewMonth { year: 2023, month0: 11 });
    }

    #[test]
    fn test_containing_and_title() {
        let view = ViewMonth::containing(date(2025, 9, 2));
        assert_eq!(view, ViewMonth { year: 2025, month0: 8 });
        assert_eq!(view.title(), "September 2025");
    }

    #[test]
    fn test_navigation_stops_at_supported_years() {
        let (min_year, max_year) = crate::utils::date::supported_years();
        let last = ViewMonth::new(i32::MAX, 0);
        assert_eq!(last.year, max_year);
        assert_eq!(last.next().next().year, max_year);
        assert_eq!(ViewMonth::new(i32::MIN, 0).previous().year, min_year);
        assert_eq!(ViewMonth::containing(NaiveDate::MAX).year, max_year);
        assert_eq!(last.offset(i32::MAX).year, max_year);
    }

    #[test]
    fn test_round_trip_navigation() {
        let start = ViewMonth::new(2024, 1);
        assert_eq!(start.next().next().previous().previous(), start);
    }
}
