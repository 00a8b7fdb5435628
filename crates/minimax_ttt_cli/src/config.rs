//! Front-end configuration loaded from TOML.

use crate::cli::{FirstPlayer, ModeChoice};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "minimax_ttt.toml";

/// Defaults for the console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Search strategy used on machine turns.
    #[serde(default = "default_mode")]
    default_mode: ModeChoice,

    /// Whether the human opens the game.
    #[serde(default = "default_human_first")]
    human_first: bool,

    /// Print every candidate with its score before the machine moves.
    #[serde(default)]
    show_child_scores: bool,
}

fn default_mode() -> ModeChoice {
    ModeChoice::AlphaBeta
}

fn default_human_first() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            human_first: default_human_first(),
            show_child_scores: false,
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

        info!(mode = ?config.default_mode, human_first = config.human_first, "Config loaded");
        Ok(config)
    }

    /// Loads `explicit` if given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] if present, otherwise defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Opening player implied by `human_first`.
    pub fn first_player(&self) -> FirstPlayer {
        if self.human_first {
            FirstPlayer::Human
        } else {
            FirstPlayer::Machine
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
