//! Bonus item: spawned on score milestones, worth a fixed bonus when eaten

use super::collision::overlaps;
use super::entity::{Entity, EntityKind, Rect};
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};

/// Whether `score` is a milestone that has not fired yet
pub fn milestone_due(score: u64, interval: u64, last_milestone: Option<u64>) -> bool {
    score > 0 && interval > 0 && score % interval == 0 && last_milestone != Some(score)
}

/// Non-wall cells, row-major, whose full-tile box is clear of every actor
pub fn spawn_candidates<R: RandomSource>(state: &GameState<R>) -> Vec<(usize, usize)> {
    let tile = state.config.tile_size;

    state
        .grid
        .cells()
        .filter(|(_, _, t)| !t.is_wall())
        .filter(|&(col, row, _)| {
            let probe = Rect::tile(col, row, tile);
            !overlaps(&probe, &state.player.rect)
                && !state.adversaries.iter().any(|a| overlaps(&probe, &a.rect))
        })
        .map(|(col, row, _)| (col, row))
        .collect()
}

/// Place the bonus item on a random free cell, or clear it if none is free.
/// Returns the chosen cell.
pub fn spawn<R: RandomSource>(state: &mut GameState<R>) -> Option<(usize, usize)> {
    let candidates = spawn_candidates(state);

    if candidates.is_empty() {
        log::warn!("No free cell for bonus item at score {}", state.score);
        state.bonus = None;
        state.emit(GameEvent::BonusSpawnSkipped { score: state.score });
        return None;
    }

    let pick = state.rng.pick_index(candidates.len());
    let (col, row) = candidates[pick.min(candidates.len() - 1)];

    state.bonus = Some(Entity::new(
        EntityKind::BonusItem,
        Rect::tile(col, row, state.config.tile_size),
    ));
    state.emit(GameEvent::BonusSpawned { col, row });
    log::debug!(
        "Bonus item spawned at ({}, {}) from {} candidates",
        col,
        row,
        candidates.len()
    );

    Some((col, row))
}

/// Spawn once per distinct milestone score
pub fn maybe_spawn_on_milestone<R: RandomSource>(state: &mut GameState<R>) {
    if milestone_due(state.score, state.config.milestone_interval, state.last_milestone) {
        spawn(state);
        state.last_milestone = Some(state.score);
    }
}

/// Award the bonus if the player is on it
pub fn check_pickup<R: RandomSource>(state: &mut GameState<R>) -> bool {
    let Some(bonus) = &state.bonus else {
        return false;
    };
    if !overlaps(&state.player.rect, &bonus.rect) {
        return false;
    }

    state.score += state.config.bonus_score;
    state.bonus = None;
    state.emit(GameEvent::BonusEaten { score: state.score });
    log::debug!("Bonus item eaten, score {}", state.score);
    true
}
