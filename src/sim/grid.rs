//! Static tile grid
//!
//! Tile legend:
//! - `X` wall
//! - ` ` empty floor holding a collectible
//! - `O` skip (floor with nothing on it)
//! - `P` player spawn (exactly one)
//! - `b`, `o`, `p`, `r` adversary spawns (blue, orange, pink, red)

use super::entity::AdversaryId;
use crate::error::MapError;

/// The stock 19x21 maze
pub const REFERENCE_MAP: [&str; 21] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    Skip,
    PlayerSpawn,
    AdversarySpawn(AdversaryId),
}

impl Tile {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' => Some(Tile::Wall),
            ' ' => Some(Tile::Empty),
            'O' => Some(Tile::Skip),
            'P' => Some(Tile::PlayerSpawn),
            _ => AdversaryId::from_char(ch).map(Tile::AdversarySpawn),
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// Immutable, validated tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells
    tiles: Vec<Tile>,
    player_spawn: (usize, usize),
}

impl Grid {
    /// Parse and validate a map given as one string per row
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        if rows.is_empty() {
            return Err(MapError::Empty);
        }

        let cols = rows[0].as_ref().chars().count();
        if cols == 0 {
            return Err(MapError::NoColumns);
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        let mut player_spawn = None;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != cols {
                return Err(MapError::RaggedRow {
                    row,
                    expected: cols,
                    actual,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(MapError::UnknownTile { row, col, ch })?;
                if tile == Tile::PlayerSpawn {
                    if player_spawn.is_some() {
                        return Err(MapError::DuplicatePlayerSpawn { row, col });
                    }
                    player_spawn = Some((col, row));
                }
                tiles.push(tile);
            }
        }

        let player_spawn = player_spawn.ok_or(MapError::MissingPlayerSpawn)?;

        Ok(Self {
            rows: rows.len(),
            cols,
            tiles,
            player_spawn,
        })
    }

    /// The stock maze
    pub fn reference() -> Result<Self, MapError> {
        Self::parse(&REFERENCE_MAP)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile at (col, row), None when out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Tile> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.tiles.get(row * self.cols + col).copied()
    }

    /// (col, row) of the player spawn
    pub fn player_spawn(&self) -> (usize, usize) {
        self.player_spawn
    }

    /// All cells in row-major order as (col, row, tile)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (i % self.cols, i / self.cols, t))
    }

    /// Number of empty (collectible-bearing) cells
    pub fn collectible_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Empty).count()
    }

    /// Play-field width in pixels
    pub fn pixel_width(&self, tile_size: i32) -> i32 {
        self.cols as i32 * tile_size
    }

    /// Play-field height in pixels
    pub fn pixel_height(&self, tile_size: i32) -> i32 {
        self.rows as i32 * tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_map_shape() {
        let grid = Grid::reference().unwrap();
        assert_eq!(grid.rows(), 21);
        assert_eq!(grid.cols(), 19);
        assert_eq!(grid.player_spawn(), (9, 15));
        assert_eq!(grid.collectible_count(), 184);
        assert_eq!(grid.pixel_width(32), 608);
        assert_eq!(grid.pixel_height(32), 672);
    }

    #[test]
    fn test_reference_map_spawns() {
        let grid = Grid::reference().unwrap();
        let adversaries: Vec<_> = grid
            .cells()
            .filter_map(|(c, r, t)| match t {
                Tile::AdversarySpawn(id) => Some((c, r, id)),
                _ => None,
            })
            .collect();
        assert_eq!(
            adversaries,
            vec![
                (9, 8, AdversaryId::Red),
                (8, 9, AdversaryId::Blue),
                (9, 9, AdversaryId::Pink),
                (10, 9, AdversaryId::Orange),
            ]
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::reference().unwrap();
        assert_eq!(grid.get(0, 0), Some(Tile::Wall));
        assert_eq!(grid.get(0, 9), Some(Tile::Skip));
        assert_eq!(grid.get(19, 0), None);
        assert_eq!(grid.get(0, 21), None);
    }

    #[test]
    fn test_rejects_empty() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::parse(&rows), Err(MapError::Empty));
        assert_eq!(Grid::parse(&[""]), Err(MapError::NoColumns));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Grid::parse(&["XXX", "XP", "XXX"]).unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_rejects_unknown_tile() {
        let err = Grid::parse(&["XXX", "XP#", "XXX"]).unwrap_err();
        assert_eq!(err, MapError::UnknownTile { row: 1, col: 2, ch: '#' });
    }

    #[test]
    fn test_requires_exactly_one_player() {
        assert_eq!(
            Grid::parse(&["XXX", "X X", "XXX"]),
            Err(MapError::MissingPlayerSpawn)
        );
        assert_eq!(
            Grid::parse(&["XXXX", "XPPX", "XXXX"]),
            Err(MapError::DuplicatePlayerSpawn { row: 1, col: 2 })
        );
    }

    #[test]
    fn test_parse_accepts_owned_rows() {
        let rows: Vec<String> = ["XXXXX", "XP bX", "XXXXX"].iter().map(|s| s.to_string()).collect();
        let grid = Grid::parse(&rows).unwrap();
        assert_eq!(grid.get(3, 1), Some(Tile::AdversarySpawn(AdversaryId::Blue)));
        assert_eq!(grid.collectible_count(), 1);
    }
}
