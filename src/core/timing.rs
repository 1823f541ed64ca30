//! Fixed-step tick accumulator for the host loop.

use super::constants::{MAX_FRAME_MS, TICKS_PER_SECOND};
use std::time::Duration;

/// Converts variable frame deltas into whole fixed-length ticks.
///
/// The remainder of each frame carries over, so over time the number of
/// ticks run matches wall-clock time at `TICKS_PER_SECOND`.
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick: Duration,
    max_frame: Duration,
    accumulated: Duration,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(1) / TICKS_PER_SECOND,
            Duration::from_millis(MAX_FRAME_MS),
        )
    }
}

impl FixedStep {
    pub fn new(tick: Duration, max_frame: Duration) -> Self {
        Self {
            tick,
            max_frame,
            accumulated: Duration::ZERO,
        }
    }

    /// Length of one tick.
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Add a frame's elapsed time and return how many ticks are now due.
    pub fn advance(&mut self, frame: Duration) -> u32 {
        self.accumulated += frame.min(self.max_frame);

        let mut due = 0;
        while self.accumulated >= self.tick {
            self.accumulated -= self.tick;
            due += 1;
        }
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.tick.saturating_sub(self.accumulated)
    }
}
