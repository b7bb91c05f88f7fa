use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Where settings live: the working directory in debug builds, the
/// platform config directory otherwise.
pub fn default_settings_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(SETTINGS_FILE)
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "SchoolCalendar", "SchoolCalendar") {
            proj_dirs.config_dir().join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }
}

/// Resolve a data file next to the settings file unless it is absolute.
pub(crate) fn resolve_relative_to(settings_path: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match settings_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}

pub fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(mut settings) => {
            settings.events_path = resolve_relative_to(settings_service.path(), &settings.events_path);
            settings
        }
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}
