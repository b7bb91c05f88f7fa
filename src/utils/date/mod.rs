// Date utility functions
// ISO keys, month arithmetic and name lookup shared by the grid and event services

use chrono::{Datelike, Duration, Local, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Anything that sits on a calendar day.
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for chrono::DateTime<Local> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl CalendarDate for chrono::NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

/// The ambient "current date" according to the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a strict `YYYY-MM-DD` string.
///
/// Returns `None` for anything else; callers treat that as a date which
/// never matches, so the record silently drops out of every query.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Same calendar day, ignoring time of day.
pub fn is_same_day<A: CalendarDate, B: CalendarDate>(a: &A, b: &B) -> bool {
    a.calendar_date() == b.calendar_date()
}

/// English month name for a zero-based month index.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[(month0 % 12) as usize]
}

pub fn month_name_of(date: NaiveDate) -> &'static str {
    month_name(date.month0())
}

/// Weekday column headings, Sunday first.
pub fn day_names() -> &'static [&'static str; 7] {
    &DAY_NAMES
}

/// Years a month view may show. One year of margin on either side of
/// chrono's range keeps the neighbouring months representable.
pub fn supported_years() -> (i32, i32) {
    (NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1)
}

/// Normalize a (year, zero-based month) pair whose month may be out of range.
///
/// The resulting year is clamped to [`supported_years`].
pub fn normalize_month(year: i32, month0: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month0);
    let (min_year, max_year) = supported_years();
    let year = total
        .div_euclid(12)
        .clamp(i64::from(min_year), i64::from(max_year));
    (year as i32, total.rem_euclid(12) as u32)
}

pub fn first_of_month(year: i32, month0: i32) -> Option<NaiveDate> {
    let (year, month0) = normalize_month(year, month0);
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

pub fn last_of_month(year: i32, month0: i32) -> Option<NaiveDate> {
    let (year, month0) = normalize_month(year, month0);
    let (next_year, next_month) = if month0 == 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

pub fn days_in_month(year: i32, month0: i32) -> u32 {
    last_of_month(year, month0).map(|d| d.day()).unwrap_or(0)
}

/// Every calendar day in `[start, end]`, inclusive. Empty when `start > end`.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        next: Some(start),
        end,
    }
}

pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.checked_add_signed(Duration::days(1));
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_iso_date_pads() {
        assert_eq!(to_iso_date(date(2025, 9, 2)), "2025-09-02");
        assert_eq!(to_iso_date(date(2024, 12, 31)), "2024-12-31");
    }

    #[test_case("2025-09-02", Some((2025, 9, 2)); "plain")]
    #[test_case(" 2024-02-29 ", Some((2024, 2, 29)); "trimmed leap day")]
    #[test_case("2023-02-29", None; "not a leap year")]
    #[test_case("2025-9-2", None; "unpadded")]
    #[test_case("02/09/2025", None; "wrong format")]
    #[test_case("", None; "empty")]
    fn test_parse_iso_date(input: &str, expected: Option<(i32, u32, u32)>) {
        assert_eq!(
            parse_iso_date(input),
            expected.map(|(y, m, d)| date(y, m, d))
        );
    }

    #[test]
    fn test_is_same_day_ignores_time() {
        let morning = date(2025, 3, 4).and_hms_opt(8, 0, 0).unwrap();
        let night = date(2025, 3, 4).and_hms_opt(23, 59, 59).unwrap();
        assert!(is_same_day(&morning, &night));
        assert!(is_same_day(&morning, &date(2025, 3, 4)));
        assert!(!is_same_day(&morning, &date(2025, 3, 5)));
    }

    #[test]
    fn test_month_and_day_names() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name_of(date(2025, 9, 1)), "September");
        assert_eq!(day_names()[0], "Sun");
        assert_eq!(day_names()[6], "Sat");
    }

    #[test_case(2025, 12, (2026, 0); "past december")]
    #[test_case(2025, -1, (2024, 11); "before january")]
    #[test_case(2025, 5, (2025, 5); "in range")]
    #[test_case(2025, 25, (2027, 1); "two years ahead")]
    fn test_normalize_month(year: i32, month0: i32, expected: (i32, u32)) {
        assert_eq!(normalize_month(year, month0), expected);
    }

    #[test]
    fn test_normalize_month_clamps_extreme_years() {
        let (min_year, max_year) = supported_years();
        assert_eq!(normalize_month(i32::MAX, 0), (max_year, 0));
        assert_eq!(normalize_month(i32::MAX, i32::MAX).0, max_year);
        assert_eq!(normalize_month(i32::MIN, -1), (min_year, 11));
        assert_eq!(normalize_month(max_year, 11), (max_year, 11));
    }

    #[test]
    fn test_month_bounds_at_supported_limits() {
        let (min_year, max_year) = supported_years();
        assert_eq!(
            last_of_month(max_year, 11),
            NaiveDate::from_ymd_opt(max_year, 12, 31)
        );
        assert_eq!(
            first_of_month(min_year, 0),
            NaiveDate::from_ymd_opt(min_year, 1, 1)
        );
        assert_eq!(days_in_month(i32::MAX, 11), 31);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2025, 11), 31);
        assert_eq!(days_in_month(2025, 8), 30);
    }

    #[test]
    fn test_dates_in_range_inclusive() {
        let days: Vec<_> = dates_in_range(date(2024, 6, 1), date(2024, 6, 3)).collect();
        assert_eq!(days, vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]);
    }

    #[test]
    fn test_dates_in_range_crosses_month() {
        let days: Vec<_> = dates_in_range(date(2024, 2, 28), date(2024, 3, 1)).collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days[1], date(2024, 2, 29));
    }

    #[test]
    fn test_dates_in_range_reversed_is_empty() {
        assert_eq!(dates_in_range(date(2024, 6, 3), date(2024, 6, 1)).count(), 0);
    }
}
