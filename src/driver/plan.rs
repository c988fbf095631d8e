use std::sync::Arc;
use std::time::Duration;

use crate::args::{PositiveU64, PositiveUsize, RunArgs};
use crate::error::ValidationError;

const MILLIS_PER_SECOND: u64 = 1_000;

/// What to send: `rate * seconds` GETs against one URL, with start times
/// spread over a `seconds`-long window.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    url: Arc<str>,
    rate: PositiveU64,
    seconds: PositiveU64,
    total: u64,
    window: Duration,
    max_in_flight: Option<PositiveUsize>,
    seed: Option<u64>,
}

impl LoadPlan {
    /// # Errors
    ///
    /// Returns an error when the URL is empty or the request count overflows.
    pub fn new(url: &str, rate: PositiveU64, seconds: PositiveU64) -> Result<Self, ValidationError> {
        if url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        let overflow = || ValidationError::RequestCountOverflow {
            rate: rate.get(),
            seconds: seconds.get(),
        };
        let total = rate.get().checked_mul(seconds.get()).ok_or_else(overflow)?;
        let window_ms = seconds
            .get()
            .checked_mul(MILLIS_PER_SECOND)
            .ok_or_else(overflow)?;

        Ok(Self {
            url: Arc::from(url),
            rate,
            seconds,
            total,
            window: Duration::from_millis(window_ms),
            max_in_flight: None,
            seed: None,
        })
    }

    /// # Errors
    ///
    /// Returns an error when the arguments do not describe a valid plan.
    pub fn from_args(args: &RunArgs) -> Result<Self, ValidationError> {
        Ok(Self::new(&args.url, args.rate, args.seconds)?
            .with_max_in_flight(args.max_in_flight)
            .with_seed(args.seed))
    }

    #[must_use]
    pub fn with_max_in_flight(mut self, max_in_flight: Option<PositiveUsize>) -> Self {
        self.max_in_flight = max_in_flight;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn shared_url(&self) -> Arc<str> {
        Arc::clone(&self.url)
    }

    #[must_use]
    pub const fn rate(&self) -> u64 {
        self.rate.get()
    }

    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds.get()
    }

    /// Number of requests dispatched.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Span over which request start times are drawn.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    #[must_use]
    pub const fn max_in_flight(&self) -> Option<PositiveUsize> {
        self.max_in_flight
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}
