//! Play configuration loaded from TOML.

use crate::games::tictactoe::{Algorithm, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal front-end.
///
/// ```toml
/// algorithm = "alpha_beta"
/// human = "X"
/// cpu_delay_ms = 1000
/// parallel = false
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Search used for CPU moves.
    #[serde(default)]
    algorithm: Algorithm,

    /// Mark played by the human in `play` mode.
    #[serde(default = "default_human")]
    human: Player,

    /// Pause before each CPU move, in milliseconds.
    #[serde(default = "default_cpu_delay_ms")]
    cpu_delay_ms: u64,

    /// Score root moves on a thread pool.
    #[serde(default)]
    parallel: bool,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

#[instrument]
fn default_cpu_delay_ms() -> u64 {
    1000
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            human: default_human(),
            cpu_delay_ms: default_cpu_delay_ms(),
            parallel: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(algorithm = %config.algorithm, human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })
    }

    /// Returns a copy with the given fields replaced where `Some`.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        algorithm: Option<Algorithm>,
        human: Option<Player>,
        cpu_delay_ms: Option<u64>,
        parallel: Option<bool>,
    ) -> Self {
        if let Some(algorithm) = algorithm {
            self.algorithm = algorithm;
        }
        if let Some(human) = human {
            self.human = human;
        }
        if let Some(delay) = cpu_delay_ms {
            self.cpu_delay_ms = delay;
        }
        if let Some(parallel) = parallel {
            self.parallel = parallel;
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = PlayConfig::from_toml("").unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(*config.algorithm(), Algorithm::AlphaBeta);
        assert_eq!(*config.cpu_delay_ms(), 1000);
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default().with_overrides(
            Some(Algorithm::Minimax),
            Some(Player::O),
            None,
            Some(true),
        );
        assert_eq!(*config.algorithm(), Algorithm::Minimax);
        assert_eq!(*config.human(), Player::O);
        assert_eq!(*config.cpu_delay_ms(), 1000);
        assert!(*config.parallel());
    }

    #[test]
    fn test_missing_overrides_keep_file_values() {
        let config = PlayConfig::from_toml("parallel = true\ncpu_delay_ms = 5").unwrap();
        let config = config.with_overrides(None, None, None, None);
        assert!(*config.parallel());
        assert_eq!(*config.cpu_delay_ms(), 5);

        let config = config.with_overrides(None, None, None, Some(false));
        assert!(!*config.parallel());
    }

    #[test]
    fn test_bad_algorithm_is_an_error() {
        let err = PlayConfig::from_toml("algorithm = \"negamax\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
