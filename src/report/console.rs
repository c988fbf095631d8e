use crate::driver::LoadOutcome;
use crate::stats::{Statistics, to_seconds};

const RULE: &str = "__________________________________";

/// Run header echoing the target and load shape.
#[must_use]
pub fn format_banner(url: &str, rate: u64, seconds: u64) -> String {
    [
        String::new(),
        RULE.to_owned(),
        String::new(),
        format!("  Request URL:  {}", url),
        format!("  Request rate: {}", rate),
        format!("  Time:         {}", seconds),
        String::new(),
        String::new(),
    ]
    .join("\n")
}

/// Final report block. Latencies are printed in seconds.
#[must_use]
pub fn format_summary(stats: &Statistics, outcome: &LoadOutcome) -> String {
    let mut lines = vec![
        String::new(),
        RULE.to_owned(),
        String::new(),
        format!(
            "  Successful:         {} of {}",
            stats.count, outcome.dispatched
        ),
    ];
    if outcome.interrupted {
        lines.push("  Interrupted:        yes (partial results)".to_owned());
    }
    lines.extend([
        format!("  Mean:               {}", seconds_text(stats.mean)),
        format!(
            "  Standard Deviation: {}",
            stats
                .std_dev
                .map_or_else(|| "n/a".to_owned(), seconds_text)
        ),
        format!("  Median:             {}", seconds_text(stats.median)),
        format!("  Mode:               {}", modes_text(&stats.modes)),
        format!("  Quickest:           {}", seconds_text(stats.min)),
        format!("  Slowest:            {}", seconds_text(stats.max)),
        RULE.to_owned(),
        String::new(),
        String::new(),
    ]);
    lines.join("\n")
}

fn seconds_text(nanoseconds: f64) -> String {
    format!("{:.6}", to_seconds(nanoseconds))
}

fn modes_text(modes: &[f64]) -> String {
    if modes.is_empty() {
        return "none".to_owned();
    }
    modes
        .iter()
        .map(|mode| seconds_text(*mode))
        .collect::<Vec<_>>()
        .join(", ")
}
