//! Adversary policy: wander, bounce off walls, funnel upward at the waypoint

use super::collision::{hits_any, overlaps};
use super::entity::{Direction, Entity, Rect};
use super::movement::apply_direction;
use super::rng::RandomSource;
use super::state::GameState;

/// How the adversary pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdversaryOutcome {
    Continue,
    /// The last life was lost; the rest of the tick is skipped
    GameOver,
}

/// Apply the waypoint rule: horizontally moving adversaries on the waypoint
/// row try to turn up.
pub fn funnel_at_waypoint(adversary: &mut Entity, waypoint_y: i32, walls: &[Rect], step: i32) {
    if adversary.rect.pos.y == waypoint_y && !adversary.direction.is_vertical() {
        apply_direction(adversary, Direction::Up, walls, step);
    }
}

/// Adversaries may not touch either side edge of the board
fn off_side(rect: &Rect, board_width: i32) -> bool {
    rect.pos.x <= 0 || rect.right() >= board_width
}

/// [`apply_direction`] that also rolls back a step onto a side edge
fn turn_within_board(
    adversary: &mut Entity,
    requested: Direction,
    walls: &[Rect],
    board_width: i32,
    step: i32,
) -> bool {
    let previous = adversary.direction;

    if !apply_direction(adversary, requested, walls, step) {
        return false;
    }
    if off_side(&adversary.rect, board_width) {
        adversary.rect.pos -= adversary.velocity;
        adversary.direction = previous;
        adversary.velocity = previous.velocity(step);
        return false;
    }

    true
}

/// Step by current velocity. On a wall or a side edge the step is undone and
/// a random direction is applied instead. Returns whether the step was kept.
pub fn wander<R: RandomSource>(
    adversary: &mut Entity,
    walls: &[Rect],
    board_width: i32,
    step: i32,
    rng: &mut R,
) -> bool {
    adversary.rect.pos += adversary.velocity;

    if off_side(&adversary.rect, board_width) || hits_any(&adversary.rect, walls) {
        adversary.rect.pos -= adversary.velocity;
        let direction = rng.pick_direction();
        turn_within_board(adversary, direction, walls, board_width, step);
        return false;
    }

    true
}

/// Run contact checks and movement for every adversary, in order.
///
/// A contact that costs a life resets everyone immediately, so adversaries
/// later in the order move from their spawn positions this same tick.
pub fn step_adversaries<R: RandomSource>(state: &mut GameState<R>) -> AdversaryOutcome {
    let step = state.config.step();
    let board_width = state.board_width();
    let waypoint_y = state.config.waypoint_row.map(|row| row * state.config.tile_size);

    for i in 0..state.adversaries.len() {
        if overlaps(&state.adversaries[i].rect, &state.player.rect) && state.lose_life() {
            return AdversaryOutcome::GameOver;
        }

        let adversary = &mut state.adversaries[i];

        if let Some(y) = waypoint_y {
            funnel_at_waypoint(adversary, y, &state.walls, step);
        }

        wander(adversary, &state.walls, board_width, step, &mut state.rng);
    }

    AdversaryOutcome::Continue
}
