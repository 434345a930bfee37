//! Engine configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::{Player, Strategy};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_minimax.toml";

/// Defaults for the command-line front end.
///
/// ```toml
/// human = "o"
/// strategy = "minimax"
/// show_stats = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side the human plays in `play`.
    human: Player,

    /// Search strategy for engine moves.
    strategy: Strategy,

    /// Print search statistics after each engine move.
    show_stats: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            strategy: Strategy::default(),
            show_stats: false,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit file if given, else [`DEFAULT_CONFIG_PATH`] when
    /// present, else the built-in defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        human: Option<Player>,
        strategy: Option<Strategy>,
        show_stats: bool,
    ) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        self.show_stats |= show_stats;
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
