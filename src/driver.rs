//! Fixed-rate tick scheduling
//!
//! Hosts call [`FixedStepDriver::update`] once per frame with the elapsed
//! wall time; the driver runs however many whole ticks that covers.

use crate::config::GameConfig;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameState, RandomSource, tick};

/// Longest frame, in seconds, the driver will catch up on
const MAX_FRAME_DT: f32 = 0.25;

/// Accumulates frame time and converts it into simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    /// Seconds per tick
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStepDriver {
    /// Driver at the default tick rate
    pub fn new() -> Self {
        Self::with_step(SIM_DT)
    }

    /// Driver at the configured tick rate
    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_step(config.tick_dt())
    }

    fn with_step(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Run the ticks covered by `dt` seconds. Returns how many ran.
    ///
    /// Stops as soon as the game ends and discards leftover time, so a
    /// restart begins on a clean slate.
    pub fn update<R: RandomSource>(&mut self, state: &mut GameState<R>, dt: f32) -> u32 {
        if state.is_game_over() {
            self.accumulator = 0.0;
            return 0;
        }

        // Clamp long stalls (tab switch, debugger)
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            tick(state);
            self.accumulator -= self.step;
            substeps += 1;

            if state.is_game_over() {
                self.accumulator = 0.0;
                break;
            }
        }

        substeps
    }
}

impl Default for FixedStepDriver {
    fn default() -> Self {
        Self::new()
    }
}
