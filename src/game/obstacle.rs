//! A single pipe pair: a top span, a gap, and a bottom span.

use super::geometry::Rect;
use crate::config::GameConfig;
use rand::Rng;

/// Pipe pair scrolling from right to left.
///
/// Heights are fixed for the pipe's lifetime; only `x` changes.
/// `top_height + gap + bottom_height == screen_height` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    x: f64,
    gap: u32,
    top_height: u32,
    width: f64,
    screen_height: u32,
}

impl Obstacle {
    /// Spawn a pipe at `spawn_x` with a top span drawn uniformly from
    /// `[pipe_margin, screen_height - gap - pipe_margin]`.
    ///
    /// `gap` must not exceed `config.max_pipe_gap()`; the difficulty floors
    /// and config validation keep it there.
    pub fn new<R: Rng>(spawn_x: f64, gap: u32, config: &GameConfig, rng: &mut R) -> Self {
        debug_assert!(
            gap <= config.max_pipe_gap(),
            "pipe gap {} exceeds maximum {}",
            gap,
            config.max_pipe_gap()
        );
        let min_top = config.pipe_margin;
        let max_top = (config.screen_height as u32)
            .saturating_sub(gap)
            .saturating_sub(config.pipe_margin)
            .max(min_top);
        let top_height = rng.gen_range(min_top..=max_top);
        Self::with_top_height(spawn_x, gap, top_height, config)
    }

    /// Build a pipe with a known top span height.
    pub fn with_top_height(spawn_x: f64, gap: u32, top_height: u32, config: &GameConfig) -> Self {
        Self {
            x: spawn_x,
            gap,
            top_height,
            width: config.pipe_width,
            screen_height: config.screen_height as u32,
        }
    }

    /// Scroll left by `speed` units.
    pub fn update(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// True once the right edge has passed the left screen boundary.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn top_height(&self) -> u32 {
        self.top_height
    }

    pub fn bottom_height(&self) -> u32 {
        self.screen_height
            .saturating_sub(self.top_height)
            .saturating_sub(self.gap)
    }

    /// Solid span from the top of the screen down to the gap.
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_height as f64)
    }

    /// Solid span from the bottom of the gap to the bottom of the screen.
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            (self.top_height + self.gap) as f64,
            self.width,
            self.bottom_height() as f64,
        )
    }

    pub fn rects(&self) -> [Rect; 2] {
        [self.top_rect(), self.bottom_rect()]
    }
}
