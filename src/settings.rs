//! User settings, loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Shortest accepted input poll; zero would spin the event loop.
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Settings {
    /// File that receives tracing output (stdout belongs to the board).
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Show the 1-9 key hint in empty cells.
    show_hints: bool,

    /// How long to wait for terminal input before redrawing.
    poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            show_hints: true,
            poll_interval_ms: 100,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if settings.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::new(format!(
                "poll_interval_ms must be at least {}, got {}",
                MIN_POLL_INTERVAL_MS, settings.poll_interval_ms
            )));
        }

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Settings {
    /// Applies command-line flags on top of the loaded settings.
    #[instrument(skip(self))]
    pub fn with_cli_overrides(self, log_file: Option<PathBuf>, no_hints: bool) -> Self {
        let settings = match log_file {
            Some(path) => self.with_log_file(path),
            None => self,
        };
        if no_hints {
            settings.with_show_hints(false)
        } else {
            settings
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
