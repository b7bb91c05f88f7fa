use chrono::NaiveDate;
use std::io::{self, Write};

use super::event_list::render_event_list;
use super::month_day_cell::{render_day_cell, CELL_WIDTH};
use super::palette::legend_line;
use crate::models::event::{CalendarData, SchoolEvent};
use crate::models::settings::{Settings, MAX_EVENTS_PER_CELL};
use crate::models::view_month::ViewMonth;
use crate::services::event::{events_by_date, month_summary};
use crate::services::grid::grid_for;
use crate::utils::date::day_names;

const SUBTITLE: &str = "Terms, holidays, exams & PD days";

/// Renders a whole month page: header, legend, grid and event list.
pub struct MonthView<'a> {
    data: &'a CalendarData,
    events: &'a [SchoolEvent],
    settings: &'a Settings,
}

impl<'a> MonthView<'a> {
    pub fn new(data: &'a CalendarData, events: &'a [SchoolEvent], settings: &'a Settings) -> Self {
        Self {
            data,
            events,
            settings,
        }
    }

    pub fn render<W: Write>(&self, out: &mut W, view: ViewMonth, today: NaiveDate) -> io::Result<()> {
        self.render_header(out)?;
        writeln!(out)?;
        writeln!(out, "<- p   {}   n ->        t: Today   q: Quit", view.title())?;
        if self.settings.show_legend {
            writeln!(out, "{}", legend_line())?;
        }
        writeln!(out)?;
        self.render_grid(out, view, today)?;
        writeln!(out)?;
        let summary = month_summary(self.data, view.year, view.month0 as i32);
        render_event_list(out, view, &summary)
    }

    /// Render to a string, for callers that do not stream.
    pub fn render_to_string(&self, view: ViewMonth, today: NaiveDate) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf, view, today)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn render_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.data.calendar_name)?;
        writeln!(out, "{}", SUBTITLE)?;
        if let Some(days) = self.data.meta.as_ref().and_then(|m| m.total_school_days) {
            writeln!(out, "{} school days", days)?;
        }
        Ok(())
    }

    fn render_grid<W: Write>(&self, out: &mut W, view: ViewMonth, today: NaiveDate) -> io::Result<()> {
        let grid = grid_for(view, today);
        let by_date = events_by_date(self.events);
        // Settings built in code skip `validate`.
        let max_events = self
            .settings
            .max_events_per_cell
            .clamp(1, MAX_EVENTS_PER_CELL);
        let separator = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(7));

        writeln!(out, "{}", separator)?;
        let header: String = day_names()
            .iter()
            .map(|name| format!("{:<width$}|", name, width = CELL_WIDTH))
            .collect();
        writeln!(out, "|{}", header)?;
        writeln!(out, "{}", separator)?;

        for week in grid.weeks() {
            let cells: Vec<Vec<String>> = week
                .iter()
                .map(|day| {
                    let events = by_date.get(day.iso.as_str()).map(Vec::as_slice).unwrap_or(&[]);
                    render_day_cell(day, events, max_events)
                })
                .collect();

            let height = cells.iter().map(Vec::len).max().unwrap_or(0);
            for line in 0..height {
                let row: String = cells
                    .iter()
                    .map(|cell| format!("{}|", cell[line]))
                    .collect();
                writeln!(out, "|{}", row)?;
            }
            writeln!(out, "{}", separator)?;
        }
        Ok(())
    }
}
