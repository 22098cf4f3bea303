//! Flappy - Terminal Arcade Game Library
//!
//! This module exposes the simulation, session flow and score history for
//! testing and for the binary.

pub mod config;
pub mod core;
pub mod game;
pub mod input;
pub mod scores;
pub mod session;
pub mod ui;
pub mod utils;

pub use config::{ConfigError, GameConfig};
pub use game::{FrameSnapshot, GameInput, Round, TickOutcome};
pub use scores::{top_scores, FileScoreLog, MemoryScoreLog, ScoreLog};
pub use session::{ScoreBoard, Screen, Session, SessionStatus};
