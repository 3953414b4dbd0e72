//! Fixed-step time accumulation
//!
//! Wall time is measured by a [`Clock`] and fed into a [`FixedTimestep`],
//! which hands it back out in whole simulation steps.

use std::time::{Duration, Instant};

/// Source of elapsed wall time
pub trait Clock {
    /// Time since the previous call (or since creation), restarting the measurement
    fn restart(&mut self) -> Duration;
}

/// Monotonic wall clock
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}

/// Clock advanced by hand; each `restart` returns the next scripted delta
#[derive(Debug, Default)]
pub struct ManualClock {
    deltas: std::collections::VecDeque<Duration>,
    /// Returned once the script runs out
    pub fallback: Duration,
}

impl ManualClock {
    pub fn new(deltas: impl IntoIterator<Item = Duration>, fallback: Duration) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
            fallback,
        }
    }

    pub fn push(&mut self, delta: Duration) {
        self.deltas.push_back(delta);
    }
}

impl Clock for ManualClock {
    fn restart(&mut self) -> Duration {
        self.deltas.pop_front().unwrap_or(self.fallback)
    }
}

/// Accumulator that releases time in fixed-size steps
///
/// The leftover after draining is always in `[0, step)`. There is no cap on
/// how many steps a long frame releases: after a stall the simulation
/// catches up completely before the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> Self {
        assert!(!step.is_zero(), "fixed step must be non-zero");
        Self {
            step,
            accumulator: Duration::ZERO,
        }
    }

    /// Step for a given update rate
    pub fn from_rate(ticks_per_second: u32) -> Self {
        Self::new(Duration::from_secs(1) / ticks_per_second.max(1))
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time not yet consumed by a step
    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    /// Add elapsed wall time
    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulator += elapsed;
    }

    /// Consume one step if enough time has built up
    pub fn consume_step(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            true
        } else {
            false
        }
    }

    /// Forget any accumulated time
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
