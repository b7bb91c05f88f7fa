//! Day cell rendering for the month view.
//!
//! A cell is a fixed-height stack of lines: the day number, up to
//! `max_events` event tags, and an overflow line ("+N") when needed.

use super::palette::category_marker;
use crate::models::calendar_day::CalendarDay;
use crate::models::event::SchoolEvent;

pub(crate) const CELL_WIDTH: usize = 14;

/// Lines for one cell, each exactly `CELL_WIDTH` characters wide.
pub(crate) fn render_day_cell(
    day: &CalendarDay,
    events: &[&SchoolEvent],
    max_events: usize,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(max_events + 2);
    lines.push(pad(&day_number_label(day)));

    for event in events.iter().take(max_events) {
        let tag = format!("{} {}", category_marker(event.category), event.title);
        lines.push(pad(&truncate_to_width(&tag, CELL_WIDTH)));
    }
    for _ in events.len().min(max_events)..max_events {
        lines.push(pad(""));
    }

    let overflow = events.len().saturating_sub(max_events);
    if overflow > 0 {
        lines.push(pad(&format!("+{}", overflow)));
    } else {
        lines.push(pad(""));
    }

    lines
}

/// Days outside the displayed month are dimmed; that wins over today.
fn day_number_label(day: &CalendarDay) -> String {
    if !day.is_current_month {
        format!("·{}", day.day_of_month)
    } else if day.is_today {
        format!("[{}]", day.day_of_month)
    } else {
        format!(" {}", day.day_of_month)
    }
}

/// Cut `text` to at most `max_width` characters, ending in "…" when cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_width - 1).collect();
    out.push('…');
    out
}

fn pad(text: &str) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(CELL_WIDTH.saturating_sub(len)))
}
