//! Reveal clock: the deterministic core of path animation.
//!
//! A path is revealed one point at a time. The reveal index starts at 0 and
//! advances by one every `delay`, stopping at the last point. Paths with one
//! point or none never advance.

use std::time::Duration;

/// Default time between reveal steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);

/// Tracks how much of a path has been revealed at a given elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealClock {
    /// Number of points in the path being revealed.
    path_len: usize,
    /// Time between steps.
    delay: Duration,
    /// Index of the last revealed point.
    reveal_index: usize,
    /// Elapsed time at which the next step is due.
    next_step_at: Duration,
}

impl RevealClock {
    /// Start revealing a path of `path_len` points.
    pub fn new(path_len: usize, delay: Duration) -> Self {
        Self {
            path_len,
            delay,
            reveal_index: 0,
            next_step_at: delay,
        }
    }

    /// A clock with nothing to reveal.
    pub fn idle(delay: Duration) -> Self {
        Self::new(0, delay)
    }

    pub fn path_len(&self) -> usize {
        self.path_len
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn reveal_index(&self) -> usize {
        self.reveal_index
    }

    /// Index the clock stops at.
    pub fn last_index(&self) -> usize {
        self.path_len.saturating_sub(1)
    }

    /// Whether this path is long enough to animate at all.
    pub fn is_animating(&self) -> bool {
        self.path_len > 1
    }

    /// Whether every step has been taken (trivially true for short paths).
    pub fn is_finished(&self) -> bool {
        self.reveal_index >= self.last_index()
    }

    /// Advance to `elapsed` (time since the path was set).
    ///
    /// Returns the number of steps taken. A late tick catches up on every
    /// step that has come due, one index per delay.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let mut steps = 0;
        while !self.is_finished() && elapsed >= self.next_step_at {
            self.reveal_index += 1;
            self.next_step_at += self.delay;
            steps += 1;
        }
        steps
    }

    /// Time from `elapsed` until the next step, or `None` once finished.
    pub fn time_until_step(&self, elapsed: Duration) -> Option<Duration> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_step_at.saturating_sub(elapsed))
        }
    }
}
