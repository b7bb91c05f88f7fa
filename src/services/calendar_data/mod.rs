//! Loading school calendar data from `events.json`.

mod sample;

pub use sample::sample_calendar;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::event::CalendarData;

#[derive(Debug, Error)]
pub enum CalendarDataError {
    #[error("failed to read calendar data from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse calendar data from {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CalendarData {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Read and parse a calendar data file.
///
/// Only structural problems fail here. Individual records with missing or
/// malformed dates are kept and skipped later by the event queries.
pub fn load_calendar_data(path: &Path) -> Result<CalendarData, CalendarDataError> {
    let data = fs::read_to_string(path).map_err(|source| CalendarDataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let calendar = CalendarData::from_json_str(&data).map_err(|source| CalendarDataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Loaded {} events for '{}' from {}",
        calendar.events.len(),
        calendar.calendar_name,
        path.display()
    );
    Ok(calendar)
}

/// Load `path`, or fall back to demo data for `year` when the file is absent
/// and `use_sample` is set.
pub fn load_or_sample(
    path: &Path,
    use_sample: bool,
    year: i32,
) -> Result<CalendarData, CalendarDataError> {
    if use_sample && !path.exists() {
        log::warn!(
            "No calendar data at {}, showing sample events for {}",
            path.display(),
            year
        );
        return Ok(sample_calendar(year));
    }
    load_calendar_data(path)
}
