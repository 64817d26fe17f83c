//! Configuration for interactive play.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default location of the play configuration.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_minimax.toml";

/// Settings for a human-vs-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark the human plays; the engine takes the other.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Name shown for the human.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the engine.
    #[serde(default = "default_engine_name")]
    engine_name: String,

    /// Print the engine's minimax value after each of its moves.
    #[serde(default = "default_show_evaluation")]
    show_evaluation: bool,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_engine_name() -> String {
    "Minimax".to_string()
}

fn default_show_evaluation() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            human_name: default_human_name(),
            engine_name: default_engine_name(),
            show_evaluation: default_show_evaluation(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns this configuration with the human playing `mark`.
    pub fn with_human_mark(mut self, mark: Player) -> Self {
        self.human_mark = mark;
        self
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
