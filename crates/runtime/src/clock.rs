//! Fixed-timestep accumulator turning wall-clock time into whole ticks.

use std::time::Duration;

/// Converts elapsed frame time into a number of simulation ticks.
///
/// Leftover time carries over to the next frame. After a long stall at
/// most `max_catch_up` ticks run and the rest of the backlog is dropped,
/// so the game slows down instead of fast-forwarding.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
    max_catch_up: u32,
}

impl FrameClock {
    pub fn new(tick_rate_hz: u32, max_catch_up: u32) -> Self {
        let hz = u64::from(tick_rate_hz.max(1));
        Self {
            step: Duration::from_nanos((1_000_000_000 / hz).max(1)),
            accumulator: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Duration of one tick.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Adds `dt` of wall time and returns how many ticks to run now.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt;
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_catch_up {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if self.accumulator >= self.step {
            let remainder = self.accumulator.as_nanos() % self.step.as_nanos();
            self.accumulator = Duration::from_nanos(remainder as u64);
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
