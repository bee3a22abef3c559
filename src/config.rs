//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use recall_core::{GameSettings, Limits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::Cli;

/// Configuration for a game run.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct RecallConfig {
    /// Initial digit count text.
    #[serde(default = "default_digits")]
    digits: String,

    /// Initial memorization time text.
    #[serde(default = "default_seconds")]
    seconds: String,

    /// Directory searched for cue sound files.
    #[serde(default = "default_sounds_dir")]
    sounds_dir: PathBuf,

    /// Start with audio disabled.
    #[serde(default)]
    muted: bool,

    /// Playback volume for cues, from 0.0 to 1.0.
    #[serde(default = "default_volume")]
    volume: f32,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,

    /// Largest digit count accepted on start.
    #[serde(default = "default_max_digits")]
    max_digits: usize,

    /// Largest memorization time accepted on start.
    #[serde(default = "default_max_seconds")]
    max_seconds: u32,
}

fn default_digits() -> String {
    "5".to_string()
}

fn default_seconds() -> String {
    "3".to_string()
}

fn default_sounds_dir() -> PathBuf {
    PathBuf::from("sounds")
}

fn default_volume() -> f32 {
    0.6
}

fn default_log_file() -> PathBuf {
    PathBuf::from("digit_recall.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_digits() -> usize {
    Limits::default().max_digits
}

fn default_max_seconds() -> u32 {
    Limits::default().max_seconds
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            digits: default_digits(),
            seconds: default_seconds(),
            sounds_dir: default_sounds_dir(),
            muted: false,
            volume: default_volume(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            max_digits: default_max_digits(),
            max_seconds: default_max_seconds(),
        }
    }
}

impl RecallConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if !(0.0..=1.0).contains(&config.volume) {
            return Err(ConfigError::new(format!(
                "Volume must be between 0.0 and 1.0, got {}",
                config.volume
            )));
        }

        info!(digits = %config.digits, seconds = %config.seconds, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self, cli))]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(digits) = &cli.digits {
            debug!(digits = %digits, "Overriding digits");
            self.digits = digits.clone();
        }
        if let Some(seconds) = &cli.seconds {
            debug!(seconds = %seconds, "Overriding seconds");
            self.seconds = seconds.clone();
        }
        if let Some(dir) = &cli.sounds_dir {
            self.sounds_dir = dir.clone();
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.mute {
            self.muted = true;
        }
        self
    }

    /// Initial round settings for a new session.
    pub fn game_settings(&self) -> GameSettings {
        GameSettings::new(self.digits.clone(), self.seconds.clone()).with_limits(Limits {
            max_digits: self.max_digits,
            max_seconds: self.max_seconds,
        })
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
