//! Input interpretation
//!
//! Raw capture (keyboard listeners, touch events) belongs to the host. This
//! module only turns what the host saw into game commands.

use serde::{Deserialize, Serialize};

use crate::sim::{Direction, GamePhase};

/// Minimum swipe travel, in screen pixels, on either axis
pub const SWIPE_THRESHOLD_PX: f32 = 24.0;

/// A request for the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Turn(Direction),
    /// Start over after game over
    Restart,
}

/// Map a DOM-style key code (`ArrowUp`, `KeyW`, ...) to a direction
pub fn direction_for_key(code: &str) -> Option<Direction> {
    match code {
        "ArrowUp" | "KeyW" => Some(Direction::Up),
        "ArrowDown" | "KeyS" => Some(Direction::Down),
        "ArrowLeft" | "KeyA" => Some(Direction::Left),
        "ArrowRight" | "KeyD" => Some(Direction::Right),
        _ => None,
    }
}

/// Command for a key press. Any key restarts once the game is over.
pub fn command_for_key(code: &str, phase: GamePhase) -> Option<Command> {
    match phase {
        GamePhase::GameOver => Some(Command::Restart),
        GamePhase::Playing => direction_for_key(code).map(Command::Turn),
    }
}

/// Classify a swipe by its displacement (screen coordinates, y down).
/// The dominant axis wins; ties go vertical.
pub fn swipe_direction(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    if dx.abs() < threshold && dy.abs() < threshold {
        return None;
    }

    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("KeyW"), Some(Direction::Up));
        assert_eq!(direction_for_key("KeyS"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("KeyD"), Some(Direction::Right));
        assert_eq!(direction_for_key("Space"), None);
    }

    #[test]
    fn test_any_key_restarts_after_game_over() {
        assert_eq!(
            command_for_key("Space", GamePhase::GameOver),
            Some(Command::Restart)
        );
        assert_eq!(
            command_for_key("ArrowLeft", GamePhase::GameOver),
            Some(Command::Restart)
        );
        assert_eq!(command_for_key("Space", GamePhase::Playing), None);
        assert_eq!(
            command_for_key("KeyA", GamePhase::Playing),
            Some(Command::Turn(Direction::Left))
        );
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        assert_eq!(swipe_direction(10.0, -20.0, SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        assert_eq!(swipe_direction(40.0, 10.0, SWIPE_THRESHOLD_PX), Some(Direction::Right));
        assert_eq!(swipe_direction(-40.0, 30.0, SWIPE_THRESHOLD_PX), Some(Direction::Left));
        assert_eq!(swipe_direction(5.0, 30.0, SWIPE_THRESHOLD_PX), Some(Direction::Down));
        assert_eq!(swipe_direction(0.0, -30.0, SWIPE_THRESHOLD_PX), Some(Direction::Up));
        // Diagonal tie resolves vertically
        assert_eq!(swipe_direction(30.0, 30.0, SWIPE_THRESHOLD_PX), Some(Direction::Down));
    }
}
