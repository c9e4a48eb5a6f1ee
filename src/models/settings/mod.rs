// Settings module
// User configuration read from config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "light" or "dark"
    pub theme: String,
    /// Overrides the events file in the platform data directory
    pub data_file: Option<PathBuf>,
    /// Default log filter, `RUST_LOG` takes precedence
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            data_file: None,
            log_level: "info".to_string(),
            window_width: 900.0,
            window_height: 600.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.theme.to_lowercase().as_str(), "light" | "dark") {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(format!("Unknown log level '{}'", self.log_level));
        }

        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err("Window size must be positive".to_string());
        }

        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}
