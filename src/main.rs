// School Calendar
// Main entry point

use anyhow::{Context, Result};
use chrono::Datelike;
use std::io;

use school_calendar::services::calendar_data::load_or_sample;
use school_calendar::services::settings::{
    default_settings_path, load_settings_or_default, SettingsService,
};
use school_calendar::ui_text::CalendarApp;
use school_calendar::utils::date::today;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting School Calendar");

    let settings_service = SettingsService::new(default_settings_path());
    let settings = load_settings_or_default(&settings_service);
    log::debug!("Using settings: {:?}", settings);

    let data = load_or_sample(
        &settings.events_path,
        settings.use_sample_data_when_missing,
        today().year(),
    )
    .context("Failed to load school calendar")?;

    let mut app = CalendarApp::new(data, settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    app.run(stdin.lock(), &mut stdout)
}
