//! Game balance and timing configuration
//!
//! Loaded from JSON. Every field has a default, so a config file only needs
//! the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Geometry ===
    /// Tile edge length in pixels
    pub tile_size: i32,
    /// Per-tick step is `tile_size / step_divisor`
    pub step_divisor: i32,
    /// Collectible edge length in pixels
    pub collectible_size: i32,

    // === Scoring ===
    pub collectible_score: u64,
    pub bonus_score: u64,
    pub milestone_interval: u64,

    // === Lifecycle ===
    pub starting_lives: u8,
    /// Grid row of the adversary waypoint (None disables the rule)
    pub waypoint_row: Option<i32>,

    // === Timing ===
    pub tick_hz: u32,
    /// RNG seed (None lets the host pick one)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            step_divisor: STEP_DIVISOR,
            collectible_size: COLLECTIBLE_SIZE,

            collectible_score: COLLECTIBLE_SCORE,
            bonus_score: BONUS_SCORE,
            milestone_interval: MILESTONE_INTERVAL,

            starting_lives: STARTING_LIVES,
            waypoint_row: Some(WAYPOINT_ROW),

            tick_hz: TICK_HZ,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Distance an entity moves per tick
    #[inline]
    pub fn step(&self) -> i32 {
        self.tile_size / self.step_divisor
    }

    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.step_divisor <= 0 || self.tile_size % self.step_divisor != 0 {
            return Err(ConfigError::Invalid(format!(
                "step_divisor {} must evenly divide tile_size {}",
                self.step_divisor, self.tile_size
            )));
        }
        if self.collectible_size <= 0 || self.collectible_size >= self.tile_size {
            return Err(ConfigError::Invalid(format!(
                "collectible_size {} must be between 1 and tile_size - 1",
                self.collectible_size
            )));
        }
        if self.milestone_interval == 0 {
            return Err(ConfigError::Invalid("milestone_interval must be non-zero".into()));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be non-zero".into()));
        }
        if self.tick_hz == 0 {
            return Err(ConfigError::Invalid("tick_hz must be non-zero".into()));
        }
        Ok(())
    }
}
