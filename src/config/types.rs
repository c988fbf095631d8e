use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_arg;
use crate::error::ValidationError;

/// On-disk config; every field is optional and CLI flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "rps")]
    pub rate: Option<u64>,
    #[serde(alias = "duration")]
    pub seconds: Option<u64>,
    pub timeout: Option<DurationValue>,
    #[serde(alias = "concurrency")]
    pub max_in_flight: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    /// # Errors
    ///
    /// Returns an error for a zero or malformed duration.
    pub fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
