//! Descriptive statistics over request latency samples.
mod engine;
mod samples;


pub use engine::Statistics;
pub use samples::SampleSet;

/// Nanoseconds per second, used when presenting samples.
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Converts a nanosecond sample into seconds.
#[must_use]
pub const fn to_seconds(nanoseconds: f64) -> f64 {
    nanoseconds / NANOS_PER_SECOND
}
