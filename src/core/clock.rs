//! Time sources and the fixed-rate tick boundary.
//!
//! The simulation never reads wall-clock time directly. The session asks its
//! `Clock` for elapsed milliseconds, and the binary's outer loop waits on a
//! `TickPacer` between ticks. Tests swap in `ManualClock` to make difficulty
//! timing deterministic.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds elapsed since the clock was created.
    fn now_ms(&self) -> u64;
}

/// Real clock backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and headless runs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Schedules fixed-rate tick boundaries for the outer driver loop.
#[derive(Debug, Clone)]
pub struct TickPacer {
    interval: Duration,
    next: Instant,
}

impl TickPacer {
    /// Pacer for `rate_hz` ticks per second, first boundary one interval after `now`.
    pub fn new(rate_hz: u32, now: Instant) -> Self {
        let interval = Duration::from_secs(1) / rate_hz.max(1);
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next boundary, zero if it has already passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Move to the following boundary.
    ///
    /// A driver that fell behind runs at most one catch-up tick immediately
    /// instead of bursting through every missed boundary.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next < now {
            self.next = now;
        }
    }

    /// Sleep until the next boundary, then advance past it.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }

    /// Restart pacing from `now` (after a blocking pause such as the score board).
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        clock.advance(16);
        assert_eq!(clock.now_ms(), 116);
        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }

    #[test]
    fn test_manual_clock_saturates() {
        let clock = ManualClock::new(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now_ms(), u64::MAX);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_pacer_interval_for_60hz() {
        let pacer = TickPacer::new(60, Instant::now());
        assert_eq!(pacer.interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_pacer_zero_rate_does_not_divide_by_zero() {
        let pacer = TickPacer::new(0, Instant::now());
        assert_eq!(pacer.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_pacer_remaining_counts_down() {
        let start = Instant::now();
        let pacer = TickPacer::new(60, start);
        assert_eq!(pacer.remaining(start), pacer.interval());
        assert_eq!(pacer.remaining(start + pacer.interval()), Duration::ZERO);
        assert_eq!(
            pacer.remaining(start + pacer.interval() * 5),
            Duration::ZERO
        );
    }

    #[test]
    fn test_pacer_advance_on_time() {
        let start = Instant::now();
        let mut pacer = TickPacer::new(60, start);
        let interval = pacer.interval();
        pacer.advance(start + interval);
        assert_eq!(pacer.remaining(start + interval), interval);
    }

    #[test]
    fn test_pacer_advance_when_behind_has_no_backlog() {
        let start = Instant::now();
        let mut pacer = TickPacer::new(60, start);
        let late = start + pacer.interval() * 10;
        pacer.advance(late);
        // One catch-up tick is due now, not nine.
        assert_eq!(pacer.remaining(late), Duration::ZERO);
        pacer.advance(late);
        assert_eq!(pacer.remaining(late), pacer.interval());
    }

    #[test]
    fn test_pacer_reset() {
        let start = Instant::now();
        let mut pacer = TickPacer::new(60, start);
        let later = start + Duration::from_secs(3);
        pacer.reset(later);
        assert_eq!(pacer.remaining(later), pacer.interval());
    }
}
