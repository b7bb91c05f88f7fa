use super::shared::{event_id, title_slug};
use crate::models::event::{CalendarData, RawEvent, RawSchedule, SchoolEvent};
use crate::utils::date::{dates_in_range, parse_iso_date, to_iso_date};
use chrono::NaiveDate;

/// Expand raw records into one event per calendar day.
///
/// Single-date records yield one event, ranges yield one per day from start
/// to end inclusive. Records without usable dates contribute nothing.
/// Identifiers are unique within one call.
///
/// A single `date` that is not a valid `YYYY-MM-DD` day is dropped rather
/// than kept as an event that never matches a grid cell: `SchoolEvent`
/// always carries a real `NaiveDate`. Such a record is also left out of
/// [`month_summary`](super::month_summary).
pub fn normalize_events(data: &CalendarData) -> Vec<SchoolEvent> {
    let mut out = Vec::with_capacity(data.events.len());
    let mut counter = 0usize;

    for raw in &data.events {
        let category = raw.category();
        let slug = title_slug(&raw.title);

        for date in raw_event_days(raw) {
            let iso = to_iso_date(date);
            out.push(SchoolEvent {
                id: event_id(counter, &iso, &slug),
                title: raw.title.clone(),
                date,
                iso,
                category,
            });
            counter += 1;
        }
    }

    out
}

/// Alias kept for callers that think of this as loading events from data.
pub fn load_events(data: &CalendarData) -> Vec<SchoolEvent> {
    normalize_events(data)
}

fn raw_event_days(raw: &RawEvent) -> Vec<NaiveDate> {
    match raw.schedule() {
        RawSchedule::Single(value) => match parse_iso_date(value) {
            Some(date) => vec![date],
            None => {
                log::debug!("Skipping '{}': unparseable date '{}'", raw.title, value);
                Vec::new()
            }
        },
        RawSchedule::Range { start, end } => match (parse_iso_date(start), parse_iso_date(end)) {
            (Some(start), Some(end)) => dates_in_range(start, end).collect(),
            _ => {
                log::debug!(
                    "Skipping '{}': unparseable range '{}' to '{}'",
                    raw.title,
                    start,
                    end
                );
                Vec::new()
            }
        },
        RawSchedule::Missing => {
            log::debug!("Skipping '{}': no date or complete date range", raw.title);
            Vec::new()
        }
    }
}
