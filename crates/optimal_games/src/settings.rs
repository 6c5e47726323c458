//! Game settings: user-configurable preferences loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use optimal_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default settings file looked up by `play`.
pub const DEFAULT_SETTINGS_FILE: &str = "optimal_games.toml";

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens the game.
    #[default]
    #[strum(to_string = "Human")]
    Human,
    /// The computer opens the game.
    #[strum(to_string = "Computer")]
    Computer,
}

impl FirstPlayer {
    /// Maps the setting onto the core player identity.
    #[instrument]
    pub fn player(self) -> Player {
        match self {
            Self::Human => Player::One,
            Self::Computer => Player::Two,
        }
    }
}

fn default_result_delay_ms() -> u64 {
    2000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("optimal_games.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// User-configurable settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Who takes the first move in each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// How long the result message stays up before the play-again prompt.
    #[serde(default = "default_result_delay_ms")]
    result_delay_ms: u64,

    /// Where tracing output is written while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            result_delay_ms: default_result_delay_ms(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(first_player = %settings.first_player, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides who moves first.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Result display delay as a `Duration`.
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

/// Settings could not be read or parsed.
///
/// Records the call site that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {message} (raised at {location})")]
pub struct ConfigError {
    /// What went wrong.
    pub message: String,
    /// Call site, as `file:line`.
    pub location: String,
}

impl ConfigError {
    /// Creates an error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            location: format!("{}:{}", caller.file(), caller.line()),
        }
    }
}
