use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::driver::{LoadOutcome, LoadPlan};
use crate::error::ReportError;
use crate::stats::{Statistics, to_seconds};

/// Machine-readable summary of one run, written with `--output`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub started_at: String,
    pub url: String,
    pub rate: u64,
    pub seconds: u64,
    pub dispatched: u64,
    pub successful: usize,
    pub interrupted: bool,
    pub elapsed_seconds: f64,
    pub latency_seconds: LatencySummary,
}

#[derive(Debug, Serialize)]
pub struct LatencySummary {
    pub mean: f64,
    pub std_dev: Option<f64>,
    pub median: f64,
    pub modes: Vec<f64>,
    pub quickest: f64,
    pub slowest: f64,
}

impl RunReport {
    #[must_use]
    pub fn new(
        started_at: DateTime<Utc>,
        plan: &LoadPlan,
        outcome: &LoadOutcome,
        stats: &Statistics,
    ) -> Self {
        Self {
            started_at: started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            url: plan.url().to_owned(),
            rate: plan.rate(),
            seconds: plan.seconds(),
            dispatched: outcome.dispatched,
            successful: stats.count,
            interrupted: outcome.interrupted,
            elapsed_seconds: outcome.elapsed.as_secs_f64(),
            latency_seconds: LatencySummary {
                mean: to_seconds(stats.mean),
                std_dev: stats.std_dev.map(to_seconds),
                median: to_seconds(stats.median),
                modes: stats.modes.iter().copied().map(to_seconds).collect(),
                quickest: to_seconds(stats.min),
                slowest: to_seconds(stats.max),
            },
        }
    }
}

/// Writes `report` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialization or the file write fails.
pub fn write_json_report(path: &Path, report: &RunReport) -> Result<(), ReportError> {
    let bytes =
        serde_json::to_vec_pretty(report).map_err(|err| ReportError::Serialize { source: err })?;
    std::fs::write(path, bytes).map_err(|err| ReportError::Write {
        path: path.to_path_buf(),
        source: err,
    })
}
