//! Driver settings
//!
//! Loaded from a JSON file; missing fields take their defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{BOARD_SIZE, GENERATIONS_PER_PATTERN, TICK_INTERVAL_MS};
use crate::error::{LifeError, Result};
use crate::sim::grid::cell_count;
use crate::sim::{Pattern, Seeder};

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board dimension N (board is N×N)
    pub board_size: usize,
    /// Delay between generations, in milliseconds
    pub tick_interval_ms: u64,
    /// Generations to run before moving to the next pattern
    pub generations_per_pattern: u64,
    /// Fixed seed for the random pattern; `None` draws fresh entropy
    pub seed: Option<u64>,
    /// Pattern the run starts with
    pub start_pattern: Pattern,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            generations_per_pattern: GENERATIONS_PER_PATTERN,
            seed: None,
            start_pattern: Pattern::Random,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        cell_count(self.board_size)?;
        Ok(())
    }

    /// Seeder matching these settings
    pub fn seeder(&self) -> Result<Seeder> {
        let seeder = Seeder::new(self.board_size)?;
        Ok(match self.seed {
            Some(seed) => seeder.with_rng_seed(seed),
            None => seeder,
        })
    }

    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| LifeError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("{} not found, using default settings", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| LifeError::Settings(format!("{}: {e}", path.display())))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LifeError::Settings(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_BOARD_SIZE;

    #[test]
    fn test_defaults_match_reference() {
        let settings = Settings::default();
        assert_eq!(settings.board_size, 50);
        assert_eq!(settings.tick_interval(), Duration::from_secs(1));
        assert_eq!(settings.start_pattern, Pattern::Random);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"seed": 42, "start_pattern": "Tumbler"}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.start_pattern, Pattern::Tumbler);
        assert_eq!(settings.board_size, BOARD_SIZE);
        assert_eq!(settings.seeder().unwrap().rng_seed(), Some(42));
    }

    #[test]
    fn test_zero_board_rejected() {
        assert_eq!(
            Settings::from_json(r#"{"board_size": 0}"#),
            Err(LifeError::InvalidSize(0))
        );
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{"board_size": 4294967296}"#),
            Err(LifeError::InvalidSize(size)) if size > MAX_BOARD_SIZE
        ));
        let settings = Settings {
            board_size: usize::MAX,
            ..Settings::default()
        };
        assert_eq!(settings.seeder(), Err(LifeError::InvalidSize(usize::MAX)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(LifeError::Settings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"start_pattern": "Glider"}"#),
            Err(LifeError::Settings(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("life-grid-settings-does-not-exist.json");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("life-grid-settings-{}.json", std::process::id()));
        let settings = Settings {
            board_size: 30,
            generations_per_pattern: 5,
            ..Settings::default()
        };
        std::fs::write(&path, settings.to_json().unwrap()).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), settings);
    }
}
