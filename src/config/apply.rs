use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, PositiveUsize, RunArgs};
use crate::error::ConfigError;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line are left untouched.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut RunArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "rate")
        && let Some(rate) = config.rate
    {
        args.rate = ensure_positive_u64(rate, "rate")?;
    }

    if !is_cli(matches, "seconds")
        && let Some(seconds) = config.seconds
    {
        args.seconds = ensure_positive_u64(seconds, "seconds")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout =
            timeout
                .to_duration()
                .map_err(|err| ConfigError::InvalidDuration {
                    field: "timeout",
                    source: err,
                })?;
    }

    if !is_cli(matches, "max_in_flight")
        && let Some(max_in_flight) = config.max_in_flight
    {
        args.max_in_flight = Some(ensure_positive_usize(max_in_flight, "max_in_flight")?);
    }

    if !is_cli(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &'static str) -> Result<PositiveU64, ConfigError> {
    PositiveU64::try_from(value)
        .map_err(|err| ConfigError::FieldMustBePositive { field, source: err })
}

fn ensure_positive_usize(value: usize, field: &'static str) -> Result<PositiveUsize, ConfigError> {
    PositiveUsize::try_from(value)
        .map_err(|err| ConfigError::FieldMustBePositive { field, source: err })
}
