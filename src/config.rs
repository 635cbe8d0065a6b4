//! Play configuration for the self-play binary.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a self-play run.
///
/// ```toml
/// seed = 42
/// move_delay_ms = 250
/// show_board = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Seed for the fallback random move; `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause between moves, for watching a game unfold.
    #[serde(default)]
    move_delay_ms: u64,

    /// Print the board after every move.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

#[instrument]
fn default_show_board() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            move_delay_ms: 0,
            show_board: default_show_board(),
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

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Returns a copy with command-line overrides applied.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        move_delay_ms: Option<u64>,
        quiet: bool,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(delay) = move_delay_ms {
            self.move_delay_ms = delay;
        }
        if quiet {
            self.show_board = false;
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
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(*config.seed(), None);
        assert_eq!(*config.move_delay_ms(), 0);
        assert!(*config.show_board());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7").unwrap();

        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.move_delay_ms(), 0);
        assert!(*config.show_board());
    }

    #[test]
    fn test_overrides_win() {
        let config = PlayConfig::default().with_overrides(Some(3), Some(100), true);
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.move_delay_ms(), 100);
        assert!(!*config.show_board());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = PlayConfig::from_file("/nonexistent/qubic.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "move_delay_ms = \"soon\"").unwrap();

        let err = PlayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
