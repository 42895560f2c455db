//! Read-only per-frame view for renderers
//!
//! Renderers draw from a `Frame` and never touch `GameState` directly.

use serde::Serialize;

use super::entity::{AdversaryId, Direction, EntityKind, Rect};
use super::rng::RandomSource;
use super::state::{GamePhase, GameState};

/// Adversary as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdversaryView {
    pub id: AdversaryId,
    pub rect: Rect,
}

/// Snapshot of everything drawable
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    pub walls: &'a [Rect],
    pub collectibles: &'a [Rect],
    pub bonus: Option<Rect>,
    pub bonus_active: bool,
    pub player: Rect,
    /// Which way the player sprite faces
    pub player_facing: Direction,
    pub adversaries: Vec<AdversaryView>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub game_over: bool,
}

impl Frame<'_> {
    /// Status line: lives and score while playing, final score after
    pub fn hud_text(&self) -> String {
        if self.game_over {
            format!("Game Over: {}", self.score)
        } else {
            format!("x{} {}", self.lives, self.score)
        }
    }
}

impl<R: RandomSource> GameState<R> {
    /// Borrow a drawable snapshot of the current state
    pub fn frame(&self) -> Frame<'_> {
        let adversaries = self
            .adversaries
            .iter()
            .filter_map(|a| match a.kind {
                EntityKind::Adversary(id) => Some(AdversaryView { id, rect: a.rect }),
                _ => None,
            })
            .collect();

        Frame {
            walls: &self.walls,
            collectibles: &self.collectibles,
            bonus: self.bonus.as_ref().map(|b| b.rect),
            bonus_active: self.bonus_active(),
            player: self.player.rect,
            player_facing: self.player.direction,
            adversaries,
            score: self.score,
            lives: self.lives,
            level: self.level,
            game_over: self.phase == GamePhase::GameOver,
        }
    }
}
