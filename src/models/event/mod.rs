// Event module
// Raw school calendar records and the per-day events derived from them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::category::EventCategory;

/// Shape of `events.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    #[serde(default)]
    pub calendar_name: String,
    #[serde(default)]
    pub events: Vec<RawEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<CalendarMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_school_days: Option<u32>,
}

/// A source record: a title plus either a single date or a start/end pair.
///
/// Dates are kept as the strings found in the data file. They are only
/// parsed when events are normalized or listed, and anything that does not
/// parse is skipped there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Explicit category key; takes precedence over title inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Which date form a raw record uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSchedule<'a> {
    Single(&'a str),
    Range { start: &'a str, end: &'a str },
    /// Neither a date nor a complete start/end pair.
    Missing,
}

impl RawEvent {
    /// A single-day record.
    pub fn on(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// A record spanning `start` to `end`, inclusive.
    pub fn spanning(
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = Some(category.key().to_string());
        self
    }

    /// A single `date` wins over a range. Empty strings count as absent.
    pub fn schedule(&self) -> RawSchedule<'_> {
        if let Some(date) = present(&self.date) {
            return RawSchedule::Single(date);
        }
        match (present(&self.start_date), present(&self.end_date)) {
            (Some(start), Some(end)) => RawSchedule::Range { start, end },
            _ => RawSchedule::Missing,
        }
    }

    /// The category this record displays as.
    pub fn category(&self) -> EventCategory {
        EventCategory::resolve(self.category.as_deref(), &self.title)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// One event instance bound to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// `YYYY-MM-DD` form of `date`, matching `CalendarDay::iso`.
    pub iso: String,
    pub category: EventCategory,
}

/// One row of the "events this month" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthListEvent {
    pub title: String,
    pub category: EventCategory,
    /// The single date, or `"start – end"` for a range.
    pub date_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schedule_single() {
        let raw = RawEvent::on("Term 1 starts", "2025-09-02");
        assert_eq!(raw.schedule(), RawSchedule::Single("2025-09-02"));
    }

    #[test]
    fn test_schedule_range() {
        let raw = RawEvent::spanning("Winter Break", "2025-12-22", "2026-01-02");
        assert_eq!(
            raw.schedule(),
            RawSchedule::Range {
                start: "2025-12-22",
                end: "2026-01-02"
            }
        );
    }

    #[test]
    fn test_schedule_single_wins_over_range() {
        let mut raw = RawEvent::spanning("Both", "2025-01-01", "2025-01-05");
        raw.date = Some("2025-02-01".into());
        assert_eq!(raw.schedule(), RawSchedule::Single("2025-02-01"));
    }

    #[test]
    fn test_schedule_incomplete_range_is_missing() {
        let mut raw = RawEvent::spanning("Half", "2025-01-01", "");
        assert_eq!(raw.schedule(), RawSchedule::Missing);
        raw.end_date = None;
        assert_eq!(raw.schedule(), RawSchedule::Missing);
        raw.date = Some(String::new());
        assert_eq!(raw.schedule(), RawSchedule::Missing);
    }

    #[test]
    fn test_category_explicit_and_inferred() {
        assert_eq!(RawEvent::on("Winter Break", "2025-12-22").category(), EventCategory::Holiday);
        let explicit = RawEvent::on("Exams begin", "2025-12-09").with_category(EventCategory::Exam);
        assert_eq!(explicit.category(), EventCategory::Exam);
    }

    #[test]
    fn test_deserialize_calendar_data() {
        let json = r#"{
            "calendarName": "Riverside Secondary 2025-26",
            "events": [
                { "title": "Term 1 starts", "date": "2025-09-02" },
                { "title": "Winter Break", "startDate": "2025-12-22", "endDate": "2026-01-02" },
                { "title": "Orphan" }
            ],
            "meta": { "totalSchoolDays": 187 }
        }"#;

        let data: CalendarData = serde_json::from_str(json).unwrap();
        assert_eq!(data.calendar_name, "Riverside Secondary 2025-26");
        assert_eq!(data.events.len(), 3);
        assert_eq!(data.events[1].start_date.as_deref(), Some("2025-12-22"));
        assert_eq!(data.events[2].schedule(), RawSchedule::Missing);
        assert_eq!(data.meta.and_then(|m| m.total_school_days), Some(187));
    }

    #[test]
    fn test_deserialize_without_meta() {
        let data: CalendarData =
            serde_json::from_str(r#"{ "calendarName": "Empty", "events": [] }"#).unwrap();
        assert!(data.meta.is_none());
        assert!(data.events.is_empty());
    }
}
