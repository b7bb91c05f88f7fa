// Settings module
// User-facing configuration read from settings.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `max_events_per_cell`.
pub const MAX_EVENTS_PER_CELL: usize = 20;

/// Calendar display and data-source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Location of the events JSON file.
    pub events_path: PathBuf,
    /// Event tags shown in one day cell before collapsing into "+N".
    pub max_events_per_cell: usize,
    pub show_legend: bool,
    /// Fall back to built-in demo events when `events_path` does not exist.
    pub use_sample_data_when_missing: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            events_path: PathBuf::from("events.json"),
            max_events_per_cell: 3,
            show_legend: true,
            use_sample_data_when_missing: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_EVENTS_PER_CELL).contains(&self.max_events_per_cell) {
            return Err(format!(
                "max_events_per_cell must be between 1 and {}",
                MAX_EVENTS_PER_CELL
            ));
        }
        if self.events_path.as_os_str().is_empty() {
            return Err("events_path cannot be empty".to_string());
        }
        Ok(())
    }
}
