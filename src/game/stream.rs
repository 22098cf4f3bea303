//! The sliding window of upcoming pipes.

use super::geometry::Rect;
use super::obstacle::Obstacle;
use crate::config::GameConfig;
use rand::Rng;
use std::collections::VecDeque;

/// Number of pipes alive at any time.
pub const ACTIVE_OBSTACLES: usize = 2;

/// Exactly two pipes ordered by spawn time; the front one is recycled first.
#[derive(Debug, Clone)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
    spawn_origin: f64,
}

impl ObstacleStream {
    /// Spawn the opening pair at `screen_width + spacing` and
    /// `screen_width + 2 * spacing`.
    pub fn new<R: Rng>(config: &GameConfig, gap: u32, spacing: u32, rng: &mut R) -> Self {
        let spawn_origin = config.screen_width;
        let obstacles = (1..=ACTIVE_OBSTACLES)
            .map(|i| {
                let x = spawn_origin + (i as u32 * spacing) as f64;
                Obstacle::new(x, gap, config, rng)
            })
            .collect();
        Self {
            obstacles,
            spawn_origin,
        }
    }

    /// Build a stream from known pipes, oldest first.
    pub fn from_obstacles(config: &GameConfig, first: Obstacle, second: Obstacle) -> Self {
        Self {
            obstacles: VecDeque::from([first, second]),
            spawn_origin: config.screen_width,
        }
    }

    /// Scroll every pipe left by `speed`.
    pub fn advance_all(&mut self, speed: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.update(speed);
        }
    }

    /// Replace the oldest pipe if it has left the screen.
    ///
    /// The replacement spawns at `screen_width + spacing` with the current
    /// gap, independent of where the surviving pipe is. Returns `true` when a
    /// pipe was recycled, which is worth one point.
    pub fn recycle_if_needed<R: Rng>(
        &mut self,
        config: &GameConfig,
        gap: u32,
        spacing: u32,
        rng: &mut R,
    ) -> bool {
        let expired = self
            .obstacles
            .front()
            .map(Obstacle::is_off_screen)
            .unwrap_or(false);
        if !expired {
            return false;
        }
        self.obstacles.pop_front();
        self.obstacles.push_back(Obstacle::new(
            self.spawn_origin + spacing as f64,
            gap,
            config,
            rng,
        ));
        true
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// The pipe that will be recycled next.
    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Top and bottom rectangles of every pipe, oldest pipe first.
    pub fn rects(&self) -> Vec<Rect> {
        self.obstacles.iter().flat_map(Obstacle::rects).collect()
    }
}
