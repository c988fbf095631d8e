use crate::error::StatsError;

/// Snapshot of a non-empty sample set. Every value is in the unit of the
/// samples it was computed from (nanoseconds for request latencies).
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator). `None` for a single sample.
    pub std_dev: Option<f64>,
    pub median: f64,
    /// Most frequent values in ascending order. Empty when every distinct
    /// value shares the highest frequency, including the all-unique case.
    pub modes: Vec<f64>,
    pub min: f64,
    pub max: f64,
    /// The samples in ascending order.
    pub sorted: Vec<f64>,
}

impl Statistics {
    /// Computes statistics over `samples`. The slice is copied; the caller's
    /// ordering is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NoSamples`] when `samples` is empty.
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatsError> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Err(StatsError::NoSamples);
        };
        let median = median(&sorted).ok_or(StatsError::NoSamples)?;

        let count = sorted.len();
        let total: f64 = sorted.iter().sum();
        let mean = (total / count as f64).max(min).min(max);

        Ok(Self {
            count,
            mean,
            std_dev: sample_std_dev(&sorted, mean),
            median,
            modes: modes(&sorted),
            min,
            max,
            sorted,
        })
    }
}

fn median(sorted: &[f64]) -> Option<f64> {
    let middle = sorted.len() / 2;
    let upper = *sorted.get(middle)?;
    if sorted.len() % 2 == 0 {
        let lower = *sorted.get(middle.checked_sub(1)?)?;
        Some((lower + upper) / 2.0)
    } else {
        Some(upper)
    }
}

fn sample_std_dev(samples: &[f64], mean: f64) -> Option<f64> {
    let denominator = samples.len().checked_sub(1).filter(|value| *value > 0)?;
    let squared: f64 = samples
        .iter()
        .map(|sample| (sample - mean).powi(2))
        .sum();
    Some((squared / denominator as f64).sqrt())
}

fn modes(sorted: &[f64]) -> Vec<f64> {
    // Runs of equal values in sorted input give per-value frequencies in ascending order.
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &value in sorted {
        match runs.last_mut() {
            Some((current, count)) if *current == value => *count = count.saturating_add(1),
            Some(_) | None => runs.push((value, 1)),
        }
    }

    let highest = runs.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let modes: Vec<f64> = runs
        .iter()
        .filter(|(_, count)| *count == highest)
        .map(|(value, _)| *value)
        .collect();

    if modes.len() == runs.len() {
        return Vec::new();
    }
    modes
}
