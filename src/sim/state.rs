//! Game state and session lifecycle
//!
//! One `GameState` owns the grid, every entity and the score. Hosts feed it
//! direction requests and call [`tick`](super::tick) at a fixed rate.

use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::entity::{Direction, Entity, Rect};
use super::grid::Grid;
use super::level::build_level;
use super::movement::apply_direction;
use super::rng::{RandomSource, SeededRng};
use crate::config::GameConfig;
use crate::error::MapError;
use crate::input::Command;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; ticks are ignored until a restart
    GameOver,
}

/// Notable things that happened during a tick, for sound and HUD effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CollectibleEaten { remaining: usize },
    LifeLost { lives_left: u8 },
    GameOver { score: u64 },
    LevelCleared { level: u32 },
    BonusSpawned { col: usize, row: usize },
    /// A milestone was reached but every cell was occupied
    BonusSpawnSkipped { score: u64 },
    BonusEaten { score: u64 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SeededRng> {
    pub config: GameConfig,
    pub(crate) grid: Grid,
    /// Static wall boxes
    pub walls: Vec<Rect>,
    /// Remaining collectible boxes (shrinks as they are eaten)
    pub collectibles: Vec<Rect>,
    pub player: Entity,
    pub adversaries: Vec<Entity>,
    /// Transient bonus item; `Some` exactly while it is active
    pub bonus: Option<Entity>,
    pub score: u64,
    pub lives: u8,
    /// 1-based level counter, bumped on every level transition
    pub level: u32,
    pub phase: GamePhase,
    /// Score that last triggered a bonus spawn
    pub last_milestone: Option<u64>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: R,
}

impl GameState<SeededRng> {
    /// New session on the reference map with a seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, MapError> {
        let grid = Grid::reference()?;
        Ok(Self::with_grid(config, grid, SeededRng::new(seed)))
    }
}

impl<R: RandomSource> GameState<R> {
    /// New session on an already validated grid
    pub fn with_grid(config: GameConfig, grid: Grid, rng: R) -> Self {
        let level = build_level(&grid, &config);
        let mut state = Self {
            lives: config.starting_lives,
            config,
            grid,
            walls: level.walls,
            collectibles: level.collectibles,
            player: level.player,
            adversaries: level.adversaries,
            bonus: None,
            score: 0,
            level: 1,
            phase: GamePhase::Playing,
            last_milestone: None,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        };

        // Adversaries start with a random heading
        state.full_reset();

        log::info!(
            "Session started: {}x{} grid, {} collectibles, {} adversaries",
            state.grid.cols(),
            state.grid.rows(),
            state.collectibles.len(),
            state.adversaries.len()
        );

        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether a bonus item is on the board
    #[inline]
    pub fn bonus_active(&self) -> bool {
        self.bonus.is_some()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Play-field width in pixels
    pub fn board_width(&self) -> i32 {
        self.grid.pixel_width(self.config.tile_size)
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Turn the player, effective immediately. Ignored after game over.
    /// Returns whether the turn committed.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        let step = self.config.step();
        apply_direction(&mut self.player, direction, &self.walls, step)
    }

    /// Start a new game. Only honored in `GameOver`; returns whether it did.
    pub fn request_restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }

        self.reload_level();
        self.full_reset();
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = 1;
        self.last_milestone = None;
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::Restarted);
        log::info!("Game restarted");
        true
    }

    /// Route an input command to the matching request
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Turn(direction) => self.request_direction(direction),
            Command::Restart => self.request_restart(),
        }
    }

    /// Rebuild walls, collectibles and actors from the grid
    pub(crate) fn reload_level(&mut self) {
        let level = build_level(&self.grid, &self.config);
        self.walls = level.walls;
        self.collectibles = level.collectibles;
        self.player = level.player;
        self.adversaries = level.adversaries;
    }

    /// Send everyone home: player stops, adversaries pick a fresh random
    /// heading, and the bonus item disappears.
    pub(crate) fn full_reset(&mut self) {
        let step = self.config.step();

        self.player.reset_to_origin();
        self.player.velocity = glam::IVec2::ZERO;

        for adversary in &mut self.adversaries {
            adversary.reset_to_origin();
            let direction = self.rng.pick_direction();
            apply_direction(adversary, direction, &self.walls, step);
        }

        self.bonus = None;
    }

    /// Take a life. Returns true when that was the last one.
    pub(crate) fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.emit(GameEvent::GameOver { score: self.score });
            log::info!("Game over with score {}", self.score);
            return true;
        }

        log::debug!("Life lost, {} remaining", self.lives);
        self.emit(GameEvent::LifeLost {
            lives_left: self.lives,
        });
        self.full_reset();
        false
    }

    /// Eat the first collectible under the player. Returns whether one was eaten.
    pub(crate) fn eat_collectible(&mut self) -> bool {
        let Some(index) = self
            .collectibles
            .iter()
            .position(|c| overlaps(&self.player.rect, c))
        else {
            return false;
        };

        self.collectibles.remove(index);
        self.score += self.config.collectible_score;
        self.emit(GameEvent::CollectibleEaten {
            remaining: self.collectibles.len(),
        });
        true
    }

    /// Start the next level once nothing is left to eat. Score and lives
    /// carry over. Returns whether the level turned over.
    pub(crate) fn advance_level_if_cleared(&mut self) -> bool {
        if !self.collectibles.is_empty() {
            return false;
        }

        self.emit(GameEvent::LevelCleared { level: self.level });
        log::info!("Level {} cleared with score {}", self.level, self.score);
        self.level += 1;
        self.reload_level();
        self.full_reset();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;
    use glam::IVec2;

    fn scripted_state() -> GameState<ScriptedRandom> {
        let grid = Grid::reference().unwrap();
        GameState::with_grid(GameConfig::default(), grid, ScriptedRandom::default())
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 12345).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.collectibles.len(), 184);
        assert_eq!(state.adversaries.len(), 4);
        assert!(!state.bonus_active());
        assert_eq!(state.board_width(), 608);
    }

    #[test]
    fn test_adversaries_get_initial_heading() {
        // Every pick is 0, i.e. Up
        let state = scripted_state();

        // Red (9, 8) and pink (9, 9) have open cells above and step into them
        assert_eq!(state.adversaries[0].pos(), IVec2::new(9 * 32, 8 * 32 - 8));
        assert_eq!(state.adversaries[0].direction, Direction::Up);
        assert_eq!(state.adversaries[2].pos(), IVec2::new(9 * 32, 9 * 32 - 8));

        // Blue (8, 9) has a wall above: it stays put and keeps its old heading
        assert_eq!(state.adversaries[1].pos(), IVec2::new(8 * 32, 9 * 32));
        assert_eq!(state.adversaries[1].direction, Direction::Right);
        assert_eq!(state.adversaries[1].velocity, IVec2::new(8, 0));
    }

    #[test]
    fn test_request_direction_ignored_after_game_over() {
        let mut state = scripted_state();
        state.phase = GamePhase::GameOver;
        let before = state.player.clone();
        assert!(!state.request_direction(Direction::Left));
        assert_eq!(state.player, before);
    }

    #[test]
    fn test_restart_only_in_game_over() {
        let mut state = scripted_state();
        state.score = 120;
        assert!(!state.request_restart());
        assert_eq!(state.score, 120);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = scripted_state();
        state.score = 900;
        state.lives = 0;
        state.level = 3;
        state.last_milestone = Some(900);
        state.collectibles.truncate(5);
        state.phase = GamePhase::GameOver;

        assert!(state.apply_command(Command::Restart));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.last_milestone, None);
        assert_eq!(state.collectibles.len(), 184);
        assert!(!state.bonus_active());
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_full_reset_stops_player_and_clears_bonus() {
        let mut state = scripted_state();
        state.player.rect.pos += IVec2::new(-16, 0);
        state.player.velocity = IVec2::new(-8, 0);
        state.player.direction = Direction::Left;
        state.bonus = Some(Entity::new(
            crate::sim::EntityKind::BonusItem,
            Rect::tile(1, 1, 32),
        ));

        state.full_reset();
        assert_eq!(state.player.pos(), state.player.origin);
        assert_eq!(state.player.velocity, IVec2::ZERO);
        assert_eq!(state.player.direction, Direction::Left);
        assert!(!state.bonus_active());
    }

    #[test]
    fn test_lose_life_counts_down_to_game_over() {
        let mut state = scripted_state();
        assert!(!state.lose_life());
        assert_eq!(state.lives, 2);
        assert!(!state.lose_life());
        assert!(state.lose_life());
        assert_eq!(state.lives, 0);
        assert!(state.is_game_over());

        let events = state.drain_events();
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 0 }));
    }
}
