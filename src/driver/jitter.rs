use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws per-request start delays, uniform in `[0, window)` at millisecond
/// resolution, from one generator shared by the whole run.
#[derive(Debug)]
pub(crate) struct JitterSchedule {
    rng: StdRng,
    window_ms: u64,
}

impl JitterSchedule {
    pub(crate) fn new(window: Duration, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            rng,
            window_ms: u64::try_from(window.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub(crate) fn next_delay(&mut self) -> Duration {
        if self.window_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(0..self.window_ms))
    }
}
