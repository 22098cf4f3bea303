//! Timer-driven difficulty ramp.
//!
//! Every `difficulty_interval_ms` the pipe gap and the spawn spacing each
//! shrink by `difficulty_step`, clamped at their floors. The interval is
//! measured from the last adjustment, so a stalled clock that jumps forward
//! applies one step, not a backlog.

use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyController {
    gap: u32,
    spacing: u32,
    min_gap: u32,
    min_spacing: u32,
    step: u32,
    interval_ms: u64,
    last_adjustment_ms: u64,
    level: u32,
}

impl DifficultyController {
    /// Start at the initial gap and spacing with the timer anchored at `now_ms`.
    pub fn new(config: &GameConfig, now_ms: u64) -> Self {
        Self {
            gap: config.initial_pipe_gap,
            spacing: config.initial_pipe_distance,
            min_gap: config.min_pipe_gap,
            min_spacing: config.min_pipe_distance,
            step: config.difficulty_step,
            interval_ms: config.difficulty_interval_ms,
            last_adjustment_ms: now_ms,
            level: 0,
        }
    }

    /// Apply one step if a full interval has passed since the last one.
    ///
    /// Returns `true` when an interval fired (even if both values were already
    /// at their floors).
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_adjustment_ms) < self.interval_ms {
            return false;
        }
        self.gap = self.gap.saturating_sub(self.step).max(self.min_gap);
        self.spacing = self.spacing.saturating_sub(self.step).max(self.min_spacing);
        self.last_adjustment_ms = now_ms;
        self.level += 1;
        log::debug!(
            "Difficulty level {}: gap={} spacing={}",
            self.level,
            self.gap,
            self.spacing
        );
        true
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Number of intervals that have fired this round.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn last_adjustment_ms(&self) -> u64 {
        self.last_adjustment_ms
    }

    /// Both parameters have reached their floors.
    pub fn is_at_floor(&self) -> bool {
        self.gap == self.min_gap && self.spacing == self.min_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_initial_values() {
        let d = DifficultyController::new(&GameConfig::default(), 0);
        assert_eq!(d.gap(), 300);
        assert_eq!(d.spacing(), 300);
        assert_eq!(d.level(), 0);
        assert!(!d.is_at_floor());
    }

    #[test]
    fn test_no_step_before_interval() {
        let mut d = DifficultyController::new(&GameConfig::default(), 1_000);
        assert!(!d.tick(1_000));
        assert!(!d.tick(10_999));
        assert_eq!(d.gap(), 300);
        assert_eq!(d.spacing(), 300);
    }

    #[test]
    fn test_step_at_interval_boundary() {
        let mut d = DifficultyController::new(&GameConfig::default(), 1_000);
        assert!(d.tick(11_000));
        assert_eq!(d.gap(), 290);
        assert_eq!(d.spacing(), 290);
        assert_eq!(d.level(), 1);
        assert_eq!(d.last_adjustment_ms(), 11_000);
    }

    #[test]
    fn test_interval_measured_from_last_adjustment() {
        let mut d = DifficultyController::new(&GameConfig::default(), 0);
        assert!(d.tick(10_500));
        // 10_000ms after start but only 9_500ms after the last step
        assert!(!d.tick(20_000));
        assert!(d.tick(20_500));
        assert_eq!(d.gap(), 280);
    }

    #[test]
    fn test_long_stall_applies_single_step() {
        let mut d = DifficultyController::new(&GameConfig::default(), 0);
        assert!(d.tick(95_000));
        assert_eq!(d.gap(), 290);
        assert_eq!(d.spacing(), 290);
        assert!(!d.tick(95_016));
    }

    #[test]
    fn test_clock_going_backwards_never_fires() {
        let mut d = DifficultyController::new(&GameConfig::default(), 50_000);
        assert!(!d.tick(10));
        assert_eq!(d.gap(), 300);
    }

    #[test]
    fn test_clamps_at_floors() {
        let mut d = DifficultyController::new(&GameConfig::default(), 0);
        let mut now = 0;
        for _ in 0..50 {
            now += 10_000;
            d.tick(now);
        }
        assert_eq!(d.gap(), 100);
        assert_eq!(d.spacing(), 100);
        assert!(d.is_at_floor());
        assert_eq!(d.level(), 50);
    }

    #[test]
    fn test_floor_reached_when_step_overshoots() {
        let config = GameConfig {
            initial_pipe_gap: 105,
            min_pipe_gap: 100,
            initial_pipe_distance: 104,
            min_pipe_distance: 100,
            ..GameConfig::default()
        };
        let mut d = DifficultyController::new(&config, 0);
        d.tick(10_000);
        assert_eq!(d.gap(), 100);
        assert_eq!(d.spacing(), 100);
    }

    #[test]
    fn test_values_never_increase() {
        let mut d = DifficultyController::new(&GameConfig::default(), 0);
        let (mut gap, mut spacing) = (d.gap(), d.spacing());
        for t in (0..400_000).step_by(16) {
            d.tick(t);
            assert!(d.gap() <= gap);
            assert!(d.spacing() <= spacing);
            assert!(d.gap() >= 100);
            assert!(d.spacing() >= 100);
            gap = d.gap();
            spacing = d.spacing();
        }
    }
}
