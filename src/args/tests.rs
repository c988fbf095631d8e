use super::parsers::{parse_bool_env, parse_duration_arg};
use super::*;
use crate::error::{AppError, AppResult, ValidationError};
use clap::Parser;
use std::time::Duration;

fn parse_test_args<I, T>(args: I) -> AppResult<RunArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    RunArgs::try_parse_from(args).map_err(AppError::from)
}

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["hitit"])?;

    let checks = [
        (args.url == "http://example.com/", "Unexpected url"),
        (args.rate.get() == 10, "Unexpected rate"),
        (args.seconds.get() == 1, "Unexpected seconds"),
        (
            args.request_timeout == Duration::from_secs(30),
            "Unexpected request_timeout",
        ),
        (args.max_in_flight.is_none(), "Expected no in-flight cap"),
        (args.seed.is_none(), "Expected no seed"),
        (args.config.is_none(), "Expected no config"),
        (args.output.is_none(), "Expected no output"),
        (!args.no_color, "Expected no_color to be false"),
        (!args.verbose, "Expected verbose to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_short_flags() -> AppResult<()> {
    let args = parse_test_args([
        "hitit",
        "-u",
        "http://localhost:8080/health",
        "-r",
        "5",
        "-s",
        "2",
    ])?;
    if args.url != "http://localhost:8080/health" {
        return Err(AppError::validation(format!("Unexpected url: {}", args.url)));
    }
    if args.rate.get() != 5 || args.seconds.get() != 2 {
        return Err(AppError::validation(format!(
            "Unexpected rate/seconds: {}/{}",
            args.rate.get(),
            args.seconds.get()
        )));
    }
    Ok(())
}

#[test]
fn parse_args_extended_flags() -> AppResult<()> {
    let args = parse_test_args([
        "hitit",
        "--timeout",
        "250ms",
        "--max-in-flight",
        "8",
        "--seed",
        "42",
        "--output",
        "report.json",
        "--no-color",
        "-v",
    ])?;
    if args.request_timeout != Duration::from_millis(250) {
        return Err(AppError::validation("Unexpected request_timeout"));
    }
    if args.max_in_flight.map(PositiveUsize::get) != Some(8) {
        return Err(AppError::validation("Unexpected max_in_flight"));
    }
    if args.seed != Some(42) {
        return Err(AppError::validation("Unexpected seed"));
    }
    if args.output.as_deref() != Some("report.json") {
        return Err(AppError::validation("Unexpected output"));
    }
    if !args.no_color || !args.verbose {
        return Err(AppError::validation("Expected no_color and verbose"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_rate() -> AppResult<()> {
    match parse_test_args(["hitit", "-r", "0"]) {
        Err(AppError::Clap { .. }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected zero rate to be rejected")),
    }
}

#[test]
fn parse_args_rejects_non_numeric_seconds() -> AppResult<()> {
    if parse_test_args(["hitit", "-s", "soon"]).is_ok() {
        return Err(AppError::validation("Expected non-numeric seconds to fail"));
    }
    Ok(())
}

#[test]
fn positive_u64_rejects_zero() -> AppResult<()> {
    match PositiveU64::try_from(0) {
        Err(ValidationError::ValueTooSmall { min: 1 }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected zero to be rejected")),
    }
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("150ms", Duration::from_millis(150)),
        ("7", Duration::from_secs(7)),
        ("7s", Duration::from_secs(7)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for {}: {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_bad_input() -> AppResult<()> {
    let cases = ["", "ms", "0s", "5d", "99999999999999999999h"];
    for input in cases {
        if parse_duration_arg(input).is_ok() {
            return Err(AppError::validation(format!(
                "Expected '{}' to be rejected",
                input
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_bool_env_spellings() -> AppResult<()> {
    let checks = [
        (parse_bool_env("1") == Some(true), "1"),
        (parse_bool_env(" YES ") == Some(true), "YES"),
        (parse_bool_env("off") == Some(false), "off"),
        (parse_bool_env("maybe").is_none(), "maybe"),
    ];
    for (ok, input) in checks {
        if !ok {
            return Err(AppError::validation(format!(
                "Unexpected parse for {}",
                input
            )));
        }
    }
    Ok(())
}
