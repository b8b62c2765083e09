use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Shortest mole interval the game accepts, in milliseconds
pub const MIN_MOLE_INTERVAL_MS: u64 = 700;
/// Longest mole interval the game accepts, in milliseconds
pub const MAX_MOLE_INTERVAL_MS: u64 = 1000;
/// Most holes a board can have: one number key per hole
pub const MAX_GRID_SIZE: usize = 9;

/// Configuration for the game
///
/// Missing fields in a config file fall back to the defaults, so a file
/// containing only `round_length_secs = 60` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of hole columns
    pub grid_columns: usize,
    /// Number of hole rows
    pub grid_rows: usize,
    /// Length of a round in seconds
    pub round_length_secs: u32,
    /// How often the mole jumps to a new hole, in milliseconds
    pub mole_interval_ms: u64,
    /// How often the countdown ticks, in milliseconds
    pub clock_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_columns: 3,
            grid_rows: 3,
            round_length_secs: 30,
            mole_interval_ms: 800,
            clock_interval_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom round length
    pub fn new(round_length_secs: u32) -> Self {
        Self {
            round_length_secs,
            ..Default::default()
        }
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Total number of holes on the board
    pub fn grid_size(&self) -> usize {
        self.grid_columns * self.grid_rows
    }

    pub fn mole_interval(&self) -> Duration {
        Duration::from_millis(self.mole_interval_ms)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_columns == 0 || self.grid_rows == 0 {
            return Err(format!(
                "grid must have at least one hole, got {}x{}",
                self.grid_columns, self.grid_rows
            ));
        }

        if self.grid_size() > MAX_GRID_SIZE {
            return Err(format!(
                "grid can have at most {} holes, got {}x{}",
                MAX_GRID_SIZE, self.grid_columns, self.grid_rows
            ));
        }

        if self.round_length_secs == 0 {
            return Err("round_length_secs must be at least 1".to_string());
        }

        if !(MIN_MOLE_INTERVAL_MS..=MAX_MOLE_INTERVAL_MS).contains(&self.mole_interval_ms) {
            return Err(format!(
                "mole_interval_ms must be in [{}, {}], got {}",
                MIN_MOLE_INTERVAL_MS, MAX_MOLE_INTERVAL_MS, self.mole_interval_ms
            ));
        }

        if self.clock_interval_ms == 0 {
            return Err("clock_interval_ms must be positive".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size(), 9);
        assert_eq!(config.round_length_secs, 30);
        assert_eq!(config.mole_interval(), Duration::from_millis(800));
        assert_eq!(config.clock_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_round_length() {
        let config = GameConfig::new(60);
        assert_eq!(config.round_length_secs, 60);
        assert_eq!(config.grid_columns, 3);
    }

    #[test]
    fn test_validation_mole_interval_range() {
        let mut config = GameConfig::default();
        config.mole_interval_ms = 699;
        assert!(config.validate().is_err());

        config.mole_interval_ms = 1001;
        assert!(config.validate().is_err());

        config.mole_interval_ms = 700;
        assert!(config.validate().is_ok());

        config.mole_interval_ms = 1000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_grid() {
        let mut config = GameConfig::default();
        config.grid_rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_grid_too_big_for_keys() {
        let mut config = GameConfig::default();
        config.grid_columns = 5;
        config.grid_rows = 5;
        assert!(config.validate().is_err());

        config.grid_columns = 2;
        config.grid_rows = 4;
        assert!(config.validate().is_ok());

        let config: GameConfig = toml::from_str("grid_columns = 4").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_round_length() {
        let config = GameConfig::new(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("round_length_secs = 45").unwrap();
        assert_eq!(config.round_length_secs, 45);
        assert_eq!(config.mole_interval_ms, 800);
        assert_eq!(config.grid_size(), 9);
    }
}
