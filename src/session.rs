//! Process-level game flow: rounds alternating with the score board.
//!
//! ```text
//!   Playing --crash--> ScoreBoard --restart--> Playing
//!      |                   |
//!      +------quit---------+--> Quit
//! ```
//!
//! The session owns the clock, score log and random source so the binary
//! only has to translate key presses and draw whatever `screen()` returns.

use crate::config::GameConfig;
use crate::core::clock::Clock;
use crate::game::{GameInput, Round, TickOutcome};
use crate::scores::{rank_of, top_scores, ScoreLog};
use rand::Rng;
use std::io;

/// Result shown after a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    /// Score of the round that just ended.
    pub final_score: u32,
    /// Highest recorded scores, highest first (includes `final_score` if it placed).
    pub top_scores: Vec<u32>,
    /// 1-based place of `final_score` on the board.
    pub rank: Option<usize>,
    /// `final_score` beats every earlier recorded score (a tie does not count).
    pub is_new_best: bool,
}

/// What the player is looking at.
#[derive(Debug, Clone)]
pub enum Screen {
    Playing(Round),
    ScoreBoard(ScoreBoard),
}

/// Whether the outer loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    Quit,
}

pub struct Session<C: Clock, L: ScoreLog, R: Rng> {
    config: GameConfig,
    clock: C,
    log: L,
    rng: R,
    screen: Screen,
    rounds_played: u32,
}

impl<C: Clock, L: ScoreLog, R: Rng> Session<C, L, R> {
    /// Start a session with a fresh round.
    pub fn new(config: GameConfig, clock: C, log: L, mut rng: R) -> Self {
        let round = Round::new(&config, clock.now_ms(), &mut rng);
        log::info!("Session started");
        Self {
            config,
            clock,
            log,
            rng,
            screen: Screen::Playing(round),
            rounds_played: 0,
        }
    }

    /// Feed one tick's inputs into the current screen.
    ///
    /// While playing this runs exactly one simulation tick. On the score board
    /// it only reacts to restart and quit.
    pub fn step(&mut self, inputs: &[GameInput]) -> io::Result<SessionStatus> {
        let now_ms = self.clock.now_ms();
        let outcome = match &mut self.screen {
            Screen::Playing(round) => round.tick(inputs, now_ms, &mut self.rng),
            Screen::ScoreBoard(_) => return Ok(self.handle_board_input(inputs, now_ms)),
        };

        match outcome {
            TickOutcome::Running => Ok(SessionStatus::Continue),
            TickOutcome::Quit => {
                log::info!("Quit during round");
                Ok(SessionStatus::Quit)
            }
            TickOutcome::Crashed { score } => {
                self.finish_round(score)?;
                Ok(SessionStatus::Continue)
            }
        }
    }

    /// Persist the score, then build the board from the log so it includes
    /// the round that just ended.
    fn finish_round(&mut self, score: u32) -> io::Result<()> {
        self.log.append(score)?;
        let history = self.log.read_all()?;
        self.rounds_played += 1;

        // The history already holds this round, so it is the only score >= itself
        let is_new_best = score > 0 && history.iter().filter(|&&s| s >= score).count() == 1;
        let top = top_scores(history, self.config.top_n);
        let rank = rank_of(score, &top);
        log::info!(
            "Round {} ended with score {} (rank {:?})",
            self.rounds_played,
            score,
            rank
        );
        self.screen = Screen::ScoreBoard(ScoreBoard {
            final_score: score,
            top_scores: top,
            rank,
            is_new_best,
        });
        Ok(())
    }

    fn handle_board_input(&mut self, inputs: &[GameInput], now_ms: u64) -> SessionStatus {
        for input in inputs {
            match input {
                GameInput::Quit => {
                    log::info!("Quit from score board");
                    return SessionStatus::Quit;
                }
                GameInput::Restart => {
                    self.restart(now_ms);
                    return SessionStatus::Continue;
                }
                GameInput::Jump => {}
            }
        }
        SessionStatus::Continue
    }

    fn restart(&mut self, now_ms: u64) {
        log::info!("Starting round {}", self.rounds_played + 1);
        self.screen = Screen::Playing(Round::new(&self.config, now_ms, &mut self.rng));
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_showing_scores(&self) -> bool {
        matches!(self.screen, Screen::ScoreBoard(_))
    }

    /// Rounds that have ended in a crash.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Best score on the last board shown, if any.
    pub fn best_score(&self) -> Option<u32> {
        match &self.screen {
            Screen::ScoreBoard(board) => board.top_scores.first().copied(),
            Screen::Playing(_) => None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn score_log(&self) -> &L {
        &self.log
    }
}
