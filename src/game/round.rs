//! One round of play: from spawn to the first collision.
//!
//! `Round::tick` is the whole per-tick contract. Given this tick's inputs and
//! the current time it runs, in order:
//!
//! 1. input (quit aborts the tick before anything moves, otherwise jump)
//! 2. avatar physics
//! 3. pipe scroll
//! 4. collision check (ends the round)
//! 5. recycle and score
//! 6. difficulty ramp
//!
//! Collision must see this tick's post-physics position, so the order is not
//! negotiable. Rendering reads `snapshot()` afterwards.

use super::avatar::Avatar;
use super::collision::collides;
use super::difficulty::DifficultyController;
use super::geometry::Rect;
use super::stream::ObstacleStream;
use crate::config::GameConfig;
use rand::Rng;

/// Discrete player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap upward.
    Jump,
    /// Start a new round from the score board.
    Restart,
    /// Leave the game.
    Quit,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still flying.
    Running,
    /// The avatar hit the ground or a pipe; the round is over.
    Crashed { score: u32 },
    /// A quit input was seen; nothing else ran this tick.
    Quit,
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub world_width: f64,
    pub world_height: f64,
    pub avatar: Rect,
    pub avatar_velocity: f64,
    /// Top and bottom span per pipe, oldest pipe first.
    pub obstacles: Vec<Rect>,
    pub ground: Rect,
    pub score: u32,
    pub gap: u32,
    pub spacing: u32,
    pub level: u32,
}

#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    avatar: Avatar,
    stream: ObstacleStream,
    difficulty: DifficultyController,
    ground: Rect,
    score: u32,
    started_at_ms: u64,
    ticks: u64,
    over: bool,
}

impl Round {
    /// Fresh round: avatar centered vertically at rest, opening pipes at the
    /// initial gap and spacing, score zero, difficulty timer anchored at `now_ms`.
    pub fn new<R: Rng>(config: &GameConfig, now_ms: u64, rng: &mut R) -> Self {
        let stream = ObstacleStream::new(
            config,
            config.initial_pipe_gap,
            config.initial_pipe_distance,
            rng,
        );
        Self::with_stream(config, now_ms, stream)
    }

    /// Fresh round around a caller-built pipe stream.
    pub fn with_stream(config: &GameConfig, now_ms: u64, stream: ObstacleStream) -> Self {
        let avatar = Avatar::new(
            config.avatar_x,
            config.screen_height / 2.0,
            config.avatar_width,
            config.avatar_height,
        );
        let ground = Rect::new(
            0.0,
            config.ground_top(),
            config.screen_width,
            config.ground_height,
        );
        Self {
            config: config.clone(),
            avatar,
            stream,
            difficulty: DifficultyController::new(config, now_ms),
            ground,
            score: 0,
            started_at_ms: now_ms,
            ticks: 0,
            over: false,
        }
    }

    /// Advance the round by one tick.
    ///
    /// A finished round is inert: it reports `Crashed` again without changing.
    pub fn tick<R: Rng>(&mut self, inputs: &[GameInput], now_ms: u64, rng: &mut R) -> TickOutcome {
        if self.over {
            return TickOutcome::Crashed { score: self.score };
        }

        if inputs.contains(&GameInput::Quit) {
            return TickOutcome::Quit;
        }
        if inputs.contains(&GameInput::Jump) {
            self.avatar.jump(self.config.jump_impulse);
        }

        self.avatar.update(self.config.gravity);
        self.stream.advance_all(self.config.pipe_speed);
        self.ticks += 1;

        if collides(&self.avatar.rect(), &self.ground, self.stream.rects()) {
            self.over = true;
            log::info!(
                "Round over after {} ticks with score {}",
                self.ticks,
                self.score
            );
            return TickOutcome::Crashed { score: self.score };
        }

        if self.stream.recycle_if_needed(
            &self.config,
            self.difficulty.gap(),
            self.difficulty.spacing(),
            rng,
        ) {
            self.score += 1;
        }

        self.difficulty.tick(now_ms);

        TickOutcome::Running
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            world_width: self.config.screen_width,
            world_height: self.config.screen_height,
            avatar: self.avatar.rect(),
            avatar_velocity: self.avatar.velocity(),
            obstacles: self.stream.rects(),
            ground: self.ground,
            score: self.score,
            gap: self.difficulty.gap(),
            spacing: self.difficulty.spacing(),
            level: self.difficulty.level(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn stream(&self) -> &ObstacleStream {
        &self.stream
    }

    pub fn difficulty(&self) -> &DifficultyController {
        &self.difficulty
    }

    pub fn ground(&self) -> Rect {
        self.ground
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Physics ticks run this round.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }
}
