//! Map loader: turns a grid into walls, collectibles and actors
//!
//! Called on session start, on every level transition and on restart. Each
//! call produces fresh collections; the session swaps them in wholesale.

use super::entity::{Entity, EntityKind, Rect};
use super::grid::{Grid, Tile};
use crate::config::GameConfig;

/// Everything the loader builds from a grid
#[derive(Debug, Clone)]
pub struct Level {
    pub walls: Vec<Rect>,
    pub collectibles: Vec<Rect>,
    pub player: Entity,
    /// In row-major spawn order
    pub adversaries: Vec<Entity>,
}

/// Build walls, collectibles, player and adversaries from `grid`
pub fn build_level(grid: &Grid, config: &GameConfig) -> Level {
    let tile = config.tile_size;
    let pellet = config.collectible_size;
    let inset = (tile - pellet) / 2;

    let mut walls = Vec::new();
    let mut collectibles = Vec::with_capacity(grid.collectible_count());
    let mut adversaries = Vec::new();

    for (col, row, cell) in grid.cells() {
        let bounds = Rect::tile(col, row, tile);
        match cell {
            Tile::Wall => walls.push(bounds),
            Tile::Empty => collectibles.push(Rect::new(
                bounds.pos.x + inset,
                bounds.pos.y + inset,
                pellet,
                pellet,
            )),
            Tile::AdversarySpawn(id) => {
                adversaries.push(Entity::new(EntityKind::Adversary(id), bounds));
            }
            Tile::PlayerSpawn | Tile::Skip => {}
        }
    }

    let (col, row) = grid.player_spawn();
    let player = Entity::new(EntityKind::Player, Rect::tile(col, row, tile));

    Level {
        walls,
        collectibles,
        player,
        adversaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::hits_any;
    use crate::sim::entity::AdversaryId;
    use glam::IVec2;

    #[test]
    fn test_reference_level_contents() {
        let grid = Grid::reference().unwrap();
        let level = build_level(&grid, &GameConfig::default());

        assert_eq!(level.walls.len(), 196);
        assert_eq!(level.collectibles.len(), 184);
        assert_eq!(level.adversaries.len(), 4);
        assert_eq!(level.player.pos(), IVec2::new(9 * 32, 15 * 32));
        assert_eq!(level.player.kind, EntityKind::Player);
        assert_eq!(level.player.velocity, IVec2::ZERO);
    }

    #[test]
    fn test_collectibles_are_centered_and_clear_of_walls() {
        let grid = Grid::reference().unwrap();
        let level = build_level(&grid, &GameConfig::default());

        // Cell (1, 1) is the first empty tile
        assert_eq!(level.collectibles[0], Rect::new(32 + 14, 32 + 14, 4, 4));
        for pellet in &level.collectibles {
            assert!(!hits_any(pellet, &level.walls));
        }
    }

    #[test]
    fn test_actors_start_clear_of_walls() {
        let grid = Grid::reference().unwrap();
        let level = build_level(&grid, &GameConfig::default());
        assert!(!hits_any(&level.player.rect, &level.walls));
        for adversary in &level.adversaries {
            assert!(!hits_any(&adversary.rect, &level.walls));
            assert_eq!(adversary.origin, adversary.pos());
        }
        assert_eq!(level.adversaries[0].kind, EntityKind::Adversary(AdversaryId::Red));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let grid = Grid::reference().unwrap();
        let config = GameConfig::default();
        let a = build_level(&grid, &config);
        let b = build_level(&grid, &config);
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.collectibles, b.collectibles);
        assert_eq!(a.player, b.player);
        assert_eq!(a.adversaries, b.adversaries);
    }
}
