//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use replay_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Display and logging settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Symbol drawn for X.
    #[serde(default = "default_x_symbol")]
    x_symbol: String,

    /// Symbol drawn for O.
    #[serde(default = "default_o_symbol")]
    o_symbol: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File receiving log output in interactive mode.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

fn default_title() -> String {
    "Tic-Tac-Toe".to_string()
}

fn default_x_symbol() -> String {
    "X".to_string()
}

fn default_o_symbol() -> String {
    "O".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
            log_filter: default_log_filter(),
            log_file: None,
        }
    }
}

impl ReplayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.x_symbol.trim().is_empty() || config.o_symbol.trim().is_empty() {
            return Err(ConfigError::new("Player symbols must not be blank"));
        }
        if config.x_symbol == config.o_symbol {
            return Err(ConfigError::new(format!(
                "Player symbols must differ (both are {:?})",
                config.x_symbol
            )));
        }
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Symbol drawn for `player`.
    pub fn symbol(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_symbol,
            Player::O => &self.o_symbol,
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
