use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber. `HITIT_LOG` wins over `RUST_LOG`;
/// without either, `--verbose` selects `debug` and everything else `info`.
/// Logs go to stderr so stdout only carries the run output.
pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = std::env::var("HITIT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| default_filter(verbose),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| default_filter(verbose)),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info,hitit=debug")
    } else {
        EnvFilter::new("info")
    }
}
