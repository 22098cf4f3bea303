//! Collision judge for the avatar against ground and pipes.

use super::geometry::Rect;

/// True if `avatar` overlaps the ground or any obstacle rectangle.
///
/// Uses the half-open rule from `Rect::intersects`: sharing an edge is not a
/// hit. There is no ceiling; flying above the screen is never a collision.
pub fn collides<I>(avatar: &Rect, ground: &Rect, obstacles: I) -> bool
where
    I: IntoIterator<Item = Rect>,
{
    avatar.intersects(ground) || obstacles.into_iter().any(|r| avatar.intersects(&r))
}
