//! The player-controlled bird.

use super::geometry::Rect;

/// Avatar with a fixed column, a free vertical position and a velocity.
///
/// Positive velocity is downward. Nothing clamps the position: the bird can
/// fly above the top of the screen, and only the ground stops a fall.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    x: f64,
    y: f64,
    velocity: f64,
    width: f64,
    height: f64,
}

impl Avatar {
    /// Create an avatar centered on `(x, y)` at rest.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            width,
            height,
        }
    }

    /// One physics step: accelerate by `gravity`, then move by the new velocity.
    pub fn update(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Replace the current velocity with `impulse`, whatever it was.
    pub fn jump(&mut self, impulse: f64) {
        self.velocity = impulse;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Collision rectangle centered on the avatar's position.
    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, self.width, self.height)
    }
}
