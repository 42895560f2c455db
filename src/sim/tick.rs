//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order within a
//! tick: player step, adversaries (contact, waypoint, wander), collectible
//! pickup, level transition, milestone spawn, bonus pickup.

use super::adversary::{AdversaryOutcome, step_adversaries};
use super::bonus;
use super::movement::advance_player;
use super::rng::RandomSource;
use super::state::{GamePhase, GameState};

/// Advance the game state by one tick. Does nothing after game over.
pub fn tick<R: RandomSource>(state: &mut GameState<R>) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    advance_player(&mut state.player, &state.walls);

    if step_adversaries(state) == AdversaryOutcome::GameOver {
        return;
    }

    state.eat_collectible();
    state.advance_level_if_cleared();
    bonus::maybe_spawn_on_milestone(state);
    bonus::check_pickup(state);
}
