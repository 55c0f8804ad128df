//! Game configuration loaded from TOML.

use crate::games::bowling::{GameSetup, SetupError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Players for a game, as read from a file like:
///
/// ```toml
/// players = ["Ada", "Grace"]
/// ```
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in bowling order.
    #[serde(default)]
    players: Vec<String>,
}

impl GameConfig {
    /// Creates a configuration from player names.
    #[instrument(skip(players))]
    pub fn new(players: Vec<String>) -> Self {
        Self { players }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(players = config.players.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Adds names given on the command line after those from the file.
    pub fn with_extra_players(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.players.extend(names);
        self
    }

    /// Builds a game setup from the configured names.
    ///
    /// # Errors
    ///
    /// Any name or player-count error.
    #[instrument(skip(self))]
    pub fn setup(&self) -> Result<GameSetup, SetupError> {
        GameSetup::with_players(self.players.iter().cloned())
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
