use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{debug, error, info};

use crate::args::RunArgs;
use crate::args::parsers::parse_bool_env;
use crate::driver::{LoadPlan, run_load};
use crate::error::AppResult;
use crate::http::ReqwestFetcher;
use crate::report::{ProgressCounter, RunReport, format_banner, format_summary, write_json_report};
use crate::stats::Statistics;

/// Parses the command line, merges the config file, and executes one run.
///
/// # Errors
///
/// Returns an error for invalid configuration, a failed runtime or client
/// setup, or a run that produced no successful responses.
pub fn run() -> AppResult<()> {
    let matches = RunArgs::command().get_matches();
    let mut args = RunArgs::from_arg_matches(&matches)?;
    apply_config(&mut args, &matches)?;

    let no_color = color_disabled(&args);
    crate::logger::init_logging(args.verbose, no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, no_color))
}

fn apply_config(args: &mut RunArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn color_disabled(args: &RunArgs) -> bool {
    args.no_color
        || std::env::var("NO_COLOR")
            .ok()
            .and_then(|value| parse_bool_env(&value))
            .unwrap_or(false)
}

async fn run_async(args: RunArgs, no_color: bool) -> AppResult<()> {
    let plan = LoadPlan::from_args(&args)?;
    let fetcher = Arc::new(ReqwestFetcher::new(args.request_timeout)?);
    debug!(
        "Request timeout {:?}, in-flight ceiling {:?}, seed {:?}",
        args.request_timeout,
        plan.max_in_flight().map(|limit| limit.get()),
        plan.seed()
    );

    print!("{}", format_banner(plan.url(), plan.rate(), plan.seconds()));

    let started_at = Utc::now();
    let mut progress = ProgressCounter::stdout(no_color);
    let outcome = run_load(
        &plan,
        fetcher,
        crate::shutdown::wait_for_shutdown_signal(),
        |count| {
            if let Err(err) = progress.update(count) {
                debug!("Failed to draw progress: {}", err);
            }
        },
    )
    .await;
    progress.finish()?;

    let stats = match Statistics::from_samples(outcome.samples.as_slice()) {
        Ok(stats) => stats,
        Err(err) => {
            error!("{} ({} requests dispatched)", err, outcome.dispatched);
            return Err(err.into());
        }
    };

    print!("{}", format_summary(&stats, &outcome));

    if let Some(path) = args.output.as_deref() {
        let report = RunReport::new(started_at, &plan, &outcome, &stats);
        write_json_report(Path::new(path), &report)?;
        info!("Report written to {}", path);
    }

    Ok(())
}
