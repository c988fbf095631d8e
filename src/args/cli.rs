use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_RATE, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SECONDS, DEFAULT_URL};
use super::parsers::{parse_duration_arg, parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal HTTP load generator - spreads GET requests randomly over a time window and reports latency statistics."
)]
pub struct RunArgs {
    /// Target URL for the requests
    #[arg(long, short = 'u', default_value = DEFAULT_URL)]
    pub url: String,

    /// Requests per second
    #[arg(long, short = 'r', default_value = DEFAULT_RATE, value_parser = parse_positive_u64)]
    pub rate: PositiveU64,

    /// Number of seconds to spread requests over
    #[arg(
        long = "seconds",
        short = 's',
        default_value = DEFAULT_SECONDS,
        value_parser = parse_positive_u64
    )]
    pub seconds: PositiveU64,

    /// Per-request timeout; an expired request is dropped like any transport failure (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = DEFAULT_REQUEST_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Maximum number of requests in flight at once (default: unlimited)
    #[arg(long = "max-in-flight", value_parser = parse_positive_usize)]
    pub max_in_flight: Option<PositiveUsize>,

    /// Seed for the jitter generator, for a reproducible request schedule
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML or JSON config file (defaults to ./hitit.toml or ./hitit.json)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Write the final report as JSON to this path
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by HITIT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
