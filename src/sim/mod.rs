//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, driven from outside
//! - Randomness only through a `RandomSource`
//! - Stable iteration order (row-major load order)
//! - No rendering or platform dependencies

pub mod adversary;
pub mod bonus;
pub mod collision;
pub mod entity;
pub mod frame;
pub mod grid;
pub mod level;
pub mod movement;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{hits_any, overlaps};
pub use entity::{AdversaryId, Direction, Entity, EntityKind, Rect};
pub use frame::{AdversaryView, Frame};
pub use grid::{Grid, REFERENCE_MAP, Tile};
pub use level::{Level, build_level};
pub use movement::{advance_player, apply_direction};
pub use rng::{RandomSource, ScriptedRandom, SeededRng};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
