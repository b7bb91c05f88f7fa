// Test fixtures - reusable calendar data
// Provides consistent school calendars across the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use school_calendar::models::event::{CalendarData, CalendarMeta, RawEvent};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// 2025-09-17, a Wednesday in the first week of term
    pub fn mid_september_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 17).unwrap()
    }

    /// 2024-02-29 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// The smallest useful events.json
pub const SINGLE_EVENT_JSON: &str = r#"{
  "calendarName": "Riverside Secondary",
  "events": [
    { "title": "Term 1 starts", "date": "2025-09-02" }
  ]
}"#;

/// A realistic school year with ranges, malformed rows and metadata
pub const SCHOOL_YEAR_JSON: &str = r#"{
  "calendarName": "Riverside Secondary 2025-2026",
  "events": [
    { "title": "Term 1 starts", "date": "2025-09-02" },
    { "title": "Faculty Planning Day", "date": "2025-09-26" },
    { "title": "National Day for Truth and Reconciliation", "date": "2025-09-30" },
    { "title": "Thanksgiving", "date": "2025-10-13" },
    { "title": "Parent-Teacher Conferences", "startDate": "2025-11-20", "endDate": "2025-11-21" },
    { "title": "Winter Break", "startDate": "2025-12-22", "endDate": "2026-01-02" },
    { "title": "Term 1 ends", "date": "2026-01-30" },
    { "title": "Provincial exam", "date": "2026-01-27" },
    { "title": "School Photo Day", "date": "2025-10-08" },
    { "title": "Broken row" },
    { "title": "Typo row", "date": "2025-10-32" }
  ],
  "meta": { "totalSchoolDays": 187 }
}"#;

pub fn school_year() -> CalendarData {
    CalendarData::from_json_str(SCHOOL_YEAR_JSON).unwrap()
}

pub fn calendar(events: Vec<RawEvent>) -> CalendarData {
    CalendarData {
        calendar_name: "Fixture".to_string(),
        events,
        meta: Some(CalendarMeta::default()),
    }
}
