//! Configuration file loading for the terminal board.
//!
//! Every key is optional; a missing file means defaults throughout.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::Level;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// `log_level` is not a tracing level name.
    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Print square indices along the board edges. Defaults to true.
    #[serde(default = "default_true")]
    pub show_indices: bool,
    /// Print each color's capture list under the board. Defaults to true.
    #[serde(default = "default_true")]
    pub show_captures: bool,
    /// Character drawn on empty squares. Defaults to '.'.
    #[serde(default = "default_empty")]
    pub empty: char,
}

fn default_true() -> bool {
    true
}

fn default_empty() -> char {
    '.'
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_indices: true,
            show_captures: true,
            empty: default_empty(),
        }
    }
}

/// Top-level configuration, read from `hotseat.toml` by default.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Log level name (error, warn, info, debug, trace).
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Loads the configuration at `path`, or defaults if the file does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the configured log level, if any.
    pub fn log_level(&self) -> Result<Option<Level>, ConfigError> {
        self.log_level
            .as_deref()
            .map(|name| {
                name.parse::<Level>()
                    .map_err(|_| ConfigError::UnknownLogLevel(name.to_string()))
            })
            .transpose()
    }
}
