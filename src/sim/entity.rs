//! Entity model: boxes, directions and movable actors
//!
//! Positions are integer pixels. Everything that moves is an [`Entity`];
//! walls and collectibles are bare [`Rect`]s.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in pixel space (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Square box covering one grid cell
    pub fn tile(col: usize, row: usize, tile_size: i32) -> Self {
        Self::new(
            col as i32 * tile_size,
            row as i32 * tile_size,
            tile_size,
            tile_size,
        )
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order random picks index into
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Velocity of `step` pixels along this direction
    pub fn velocity(self, step: i32) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -step),
            Direction::Down => IVec2::new(0, step),
            Direction::Left => IVec2::new(-step, 0),
            Direction::Right => IVec2::new(step, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Adversary identity, taken from its spawn tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdversaryId {
    Blue,
    Orange,
    Pink,
    Red,
}

impl AdversaryId {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'b' => Some(AdversaryId::Blue),
            'o' => Some(AdversaryId::Orange),
            'p' => Some(AdversaryId::Pink),
            'r' => Some(AdversaryId::Red),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            AdversaryId::Blue => 'b',
            AdversaryId::Orange => 'o',
            AdversaryId::Pink => 'p',
            AdversaryId::Red => 'r',
        }
    }
}

/// What an entity is; behavior dispatches on this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Adversary(AdversaryId),
    BonusItem,
}

/// A movable box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub rect: Rect,
    pub direction: Direction,
    /// Pixels per tick, derived from `direction` whenever it is applied
    pub velocity: IVec2,
    /// Position captured at creation, restored by `reset_to_origin`
    pub origin: IVec2,
}

impl Entity {
    /// New entity at rest, facing right
    pub fn new(kind: EntityKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            direction: Direction::Right,
            velocity: IVec2::ZERO,
            origin: rect.pos,
        }
    }

    /// Move back to the spawn position. Direction and velocity are kept.
    pub fn reset_to_origin(&mut self) {
        self.rect.pos = self.origin;
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.rect.pos
    }
}
