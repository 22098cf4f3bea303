//! Score history: an append-only log of finished-round scores.
//!
//! The file format is one decimal score per line. Anything else on a line
//! (blank, signs, words, invalid UTF-8, numbers too large for `u32`) is
//! skipped on read, so a hand-edited or partially written file never stops
//! the game.

use crate::core::constants::SCORE_HISTORY_FILE;
use crate::utils::persistence;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Durable store of past scores.
pub trait ScoreLog {
    /// Record one finished round. The write is complete when this returns.
    fn append(&mut self, score: u32) -> io::Result<()>;

    /// Every recorded score in append order. A log that was never written
    /// reads as empty.
    fn read_all(&self) -> io::Result<Vec<u32>>;
}

/// Scores kept in a plain text file.
#[derive(Debug, Clone)]
pub struct FileScoreLog {
    path: PathBuf,
}

impl FileScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ~/.flappy/score_history.txt
    pub fn default_location() -> io::Result<Self> {
        Ok(Self::new(persistence::data_path(SCORE_HISTORY_FILE)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreLog for FileScoreLog {
    fn append(&mut self, score: u32) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", score)?;
        file.flush()?;
        Ok(())
    }

    fn read_all(&self) -> io::Result<Vec<u32>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut skipped = 0;
        let scores: Vec<u32> = contents
            .split(|b| *b == b'\n')
            .filter_map(|line| {
                let parsed = std::str::from_utf8(line).ok().and_then(parse_record);
                if parsed.is_none() && !line.iter().all(u8::is_ascii_whitespace) {
                    skipped += 1;
                }
                parsed
            })
            .collect();
        if skipped > 0 {
            log::debug!(
                "Skipped {} malformed lines in {}",
                skipped,
                self.path.display()
            );
        }
        Ok(scores)
    }
}

/// Parse one line of the score file: digits only, surrounding whitespace allowed.
fn parse_record(line: &str) -> Option<u32> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Scores kept in memory, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreLog {
    scores: Vec<u32>,
}

impl MemoryScoreLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: Vec<u32>) -> Self {
        Self { scores }
    }
}

impl ScoreLog for MemoryScoreLog {
    fn append(&mut self, score: u32) -> io::Result<()> {
        self.scores.push(score);
        Ok(())
    }

    fn read_all(&self) -> io::Result<Vec<u32>> {
        Ok(self.scores.clone())
    }
}

/// The `n` highest scores, highest first. Ties are all kept.
pub fn top_scores(mut scores: Vec<u32>, n: usize) -> Vec<u32> {
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.truncate(n);
    scores
}

/// 1-based place of `score` on a board produced by `top_scores`, if it made it.
pub fn rank_of(score: u32, board: &[u32]) -> Option<usize> {
    board.iter().position(|&s| s == score).map(|i| i + 1)
}
