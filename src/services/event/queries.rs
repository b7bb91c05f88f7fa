use crate::models::event::{CalendarData, MonthListEvent, RawSchedule, SchoolEvent};
use crate::models::view_month::ViewMonth;
use crate::utils::date::{first_of_month, last_of_month, parse_iso_date};
use std::collections::HashMap;

/// Events whose date equals `iso`, in normalizer order.
pub fn events_on_date<'a>(events: &'a [SchoolEvent], iso: &str) -> Vec<&'a SchoolEvent> {
    events.iter().filter(|e| e.iso == iso).collect()
}

/// Group events by ISO date, preserving normalizer order within each day.
pub fn events_by_date(events: &[SchoolEvent]) -> HashMap<&str, Vec<&SchoolEvent>> {
    let mut index: HashMap<&str, Vec<&SchoolEvent>> = HashMap::new();
    for event in events {
        index.entry(event.iso.as_str()).or_default().push(event);
    }
    index
}

/// One entry per raw record touching the month, sorted by date label.
///
/// Ranges are not expanded: a range overlapping the month appears once,
/// labelled `"start – end"`. Sorting compares labels as strings, so it is
/// not guaranteed chronological for ranges.
pub fn month_summary(data: &CalendarData, year: i32, month0: i32) -> Vec<MonthListEvent> {
    let view = ViewMonth::new(year, month0);
    let (Some(month_start), Some(month_end)) = (
        first_of_month(view.year, view.month0 as i32),
        last_of_month(view.year, view.month0 as i32),
    ) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for raw in &data.events {
        let (in_month, date_label) = match raw.schedule() {
            RawSchedule::Single(value) => {
                let in_month = parse_iso_date(value)
                    .is_some_and(|d| d >= month_start && d <= month_end);
                (in_month, value.to_string())
            }
            RawSchedule::Range { start, end } => {
                let in_month = match (parse_iso_date(start), parse_iso_date(end)) {
                    (Some(start), Some(end)) => start <= month_end && end >= month_start,
                    _ => false,
                };
                (in_month, format!("{} – {}", start, end))
            }
            RawSchedule::Missing => continue,
        };

        if !in_month {
            continue;
        }
        out.push(MonthListEvent {
            title: raw.title.clone(),
            category: raw.category(),
            date_label,
        });
    }

    out.sort_by(|a, b| a.date_label.cmp(&b.date_label));
    out
}
