//! Application configuration loaded from TOML.

use crate::view::ViewOptions;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the front ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Append `(row, col)` to history labels.
    #[serde(default)]
    show_coordinates: bool,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default)]
    log_filter: Option<String>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_history.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_coordinates: false,
            log_file: default_log_file(),
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given and present, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!("Config file not found at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Forces coordinate suffixes on.
    pub fn with_show_coordinates(mut self, show: bool) -> Self {
        self.show_coordinates = show;
        self
    }

    /// View switches derived from this config.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            show_coordinates: self.show_coordinates,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
