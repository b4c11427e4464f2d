//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{Mark, MatchSetup};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays a session and how the opening coin is seeded.
///
/// ```toml
/// player1_name = "Ada"
/// player1_mark = "x"
/// player2_computer = true
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Human player name; blank uses the engine default.
    #[serde(default)]
    player1_name: String,

    /// Human player mark.
    #[serde(default = "default_player1_mark")]
    player1_mark: Mark,

    /// Second player name; blank uses the engine default.
    #[serde(default)]
    player2_name: String,

    /// Second player mark; defaults to the opposite of player 1.
    #[serde(default)]
    player2_mark: Option<Mark>,

    /// Whether the search plays for player 2.
    #[serde(default = "default_player2_computer")]
    player2_computer: bool,

    /// Seed for the opening coin; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_player1_mark() -> Mark {
    Mark::X
}

fn default_player2_computer() -> bool {
    true
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading session config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player1 = %config.player1_name,
            computer = config.player2_computer,
            "Session config loaded"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with `seed` replacing the configured one.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Arguments for starting the session.
    pub fn to_setup(&self) -> MatchSetup {
        MatchSetup {
            player1_name: self.player1_name.clone(),
            player1_mark: self.player1_mark,
            player2_name: self.player2_name.clone(),
            player2_mark: self
                .player2_mark
                .unwrap_or_else(|| self.player1_mark.opponent()),
            player2_computer: self.player2_computer,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player1_name: String::new(),
            player1_mark: default_player1_mark(),
            player2_name: String::new(),
            player2_mark: None,
            player2_computer: default_player2_computer(),
            seed: None,
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
