//! Interactive month browser.

mod navigation;

pub use navigation::AppCommand;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

use super::views::MonthView;
use crate::models::event::{CalendarData, SchoolEvent};
use crate::models::settings::Settings;
use crate::models::view_month::ViewMonth;
use crate::services::event::normalize_events;
use crate::utils::date;

pub struct CalendarApp {
    data: CalendarData,
    /// Normalized once; the data file does not change while running.
    events: Vec<SchoolEvent>,
    settings: Settings,
    view: ViewMonth,
    fixed_today: Option<NaiveDate>,
}

impl CalendarApp {
    /// Start on the month containing today.
    pub fn new(data: CalendarData, settings: Settings) -> Self {
        let events = normalize_events(&data);
        log::debug!("Normalized {} day events", events.len());
        Self {
            data,
            events,
            settings,
            view: ViewMonth::containing(date::today()),
            fixed_today: None,
        }
    }

    /// Pin "today", e.g. for reproducible output.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self.view = ViewMonth::containing(today);
        self
    }

    pub fn with_view(mut self, view: ViewMonth) -> Self {
        self.view = view;
        self
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn events(&self) -> &[SchoolEvent] {
        &self.events
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(date::today)
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        MonthView::new(&self.data, &self.events, &self.settings)
            .render(out, self.view, self.today())
            .context("failed to render month view")
    }

    /// Apply one command. Returns `false` once the user asked to quit.
    pub fn handle(&mut self, command: AppCommand) -> bool {
        match command {
            AppCommand::Navigate(intent) => {
                self.view = self.view.apply(intent, self.today());
                log::debug!("Viewing {}", self.view.title());
                true
            }
            AppCommand::Quit => false,
            AppCommand::Help | AppCommand::Unknown(_) => true,
        }
    }

    /// Render, read a command, repeat until quit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.render(out)?;
        prompt(out)?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            let command = AppCommand::parse(&line);
            match &command {
                AppCommand::Help => writeln!(out, "{}", AppCommand::HELP)?,
                AppCommand::Unknown(text) => {
                    writeln!(out, "Unknown command '{}'. {}", text, AppCommand::HELP)?
                }
                _ => {}
            }

            if !self.handle(command.clone()) {
                return Ok(());
            }
            if matches!(command, AppCommand::Navigate(_)) {
                writeln!(out)?;
                self.render(out)?;
            }
            prompt(out)?;
        }

        log::debug!("Input closed");
        Ok(())
    }
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush().context("failed to flush output")
}
