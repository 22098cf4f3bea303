//! Flappy simulation core.
//!
//! A bird falls under gravity and flaps through a stream of pipe pairs. Each
//! pipe that scrolls off the left edge is recycled to the right and scores a
//! point; every ten seconds the gaps and spacing tighten. Touching the
//! ground or a pipe ends the round.

pub mod avatar;
pub mod collision;
pub mod difficulty;
pub mod geometry;
pub mod obstacle;
pub mod round;
pub mod stream;

pub use avatar::Avatar;
pub use collision::collides;
pub use difficulty::DifficultyController;
pub use geometry::Rect;
pub use obstacle::Obstacle;
pub use round::{FrameSnapshot, GameInput, Round, TickOutcome};
pub use stream::{ObstacleStream, ACTIVE_OBSTACLES};
