//! Console output and report export for a finished run.
mod console;
mod export;
mod progress;


pub use console::{format_banner, format_summary};
pub use export::{LatencySummary, RunReport, write_json_report};
pub use progress::ProgressCounter;
