//! Collision detection for axis-aligned boxes
//!
//! One test serves walls, pickups and adversary contact alike.

use super::entity::Rect;

/// Strict AABB intersection. Boxes that only share an edge do not overlap,
/// which lets entities sit flush against walls.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// Whether `rect` overlaps any of `others`
#[inline]
pub fn hits_any(rect: &Rect, others: &[Rect]) -> bool {
    others.iter().any(|o| overlaps(rect, o))
}
