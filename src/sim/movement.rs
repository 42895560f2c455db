//! Direction changes and per-tick stepping against the wall set

use super::collision::hits_any;
use super::entity::{Direction, Entity, Rect};

/// Turn `entity` toward `requested` and take one speculative step.
///
/// If the step lands in a wall the step is undone and the previous direction
/// (with its velocity) comes back. Returns whether the move committed.
/// Re-applying the current direction is how a moving entity continues.
pub fn apply_direction(entity: &mut Entity, requested: Direction, walls: &[Rect], step: i32) -> bool {
    let previous = entity.direction;

    entity.direction = requested;
    entity.velocity = requested.velocity(step);
    entity.rect.pos += entity.velocity;

    if hits_any(&entity.rect, walls) {
        entity.rect.pos -= entity.velocity;
        entity.direction = previous;
        entity.velocity = previous.velocity(step);
        return false;
    }

    true
}

/// Move the player by its current velocity, halting flush at walls.
///
/// Unlike [`apply_direction`] a blocked step leaves direction and velocity
/// alone, so the player stays parked until a new direction is requested.
pub fn advance_player(player: &mut Entity, walls: &[Rect]) -> bool {
    player.rect.pos += player.velocity;

    if hits_any(&player.rect, walls) {
        player.rect.pos -= player.velocity;
        return false;
    }

    true
}
