//! Settings loading and the on-disk locations derived from them.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Overrides the config file location
pub const CONFIG_PATH_ENV_VAR: &str = "MONTH_CALENDAR_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";
const EVENTS_FILE_NAME: &str = "calendar_events.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "KenBoyle", "MonthCalendar")
}

pub struct SettingsService;

impl SettingsService {
    /// Config file location: `$MONTH_CALENDAR_CONFIG`, else the platform config dir
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read and validate settings; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        Ok(settings)
    }

    /// Events file: the configured override, else the platform data dir
    pub fn events_path(settings: &Settings) -> Option<PathBuf> {
        settings
            .data_file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(EVENTS_FILE_NAME)))
    }
}
