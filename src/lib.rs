//! Tile Chase - A tile-grid maze chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, movement, adversaries, game state)
//! - `config`: Data-driven game balance
//! - `driver`: Fixed-rate tick scheduling for hosts
//! - `input`: Key and swipe interpretation into game commands

pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod sim;

pub use config::GameConfig;
pub use driver::FixedStepDriver;
pub use error::{ConfigError, MapError};
pub use input::Command;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 20;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Edge length of a square grid tile, in pixels
    pub const TILE_SIZE: i32 = 32;
    /// Entities move a quarter tile per tick
    pub const STEP_DIVISOR: i32 = 4;
    /// Edge length of a collectible pellet, in pixels
    pub const COLLECTIBLE_SIZE: i32 = 4;

    /// Points per collectible
    pub const COLLECTIBLE_SCORE: u64 = 10;
    /// Points for the bonus item
    pub const BONUS_SCORE: u64 = 300;
    /// Bonus item spawns on every exact multiple of this score
    pub const MILESTONE_INTERVAL: u64 = 300;
    /// Lives at session start and after restart
    pub const STARTING_LIVES: u8 = 3;
    /// Row where horizontally moving adversaries are turned upward
    pub const WAYPOINT_ROW: i32 = 9;
}
