//! Concurrent request dispatch with randomized start times and fan-in
//! collection of the resulting latencies.
mod jitter;
mod plan;
mod task;


use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::http::Fetcher;
use crate::stats::SampleSet;

use jitter::JitterSchedule;
use task::RequestTask;

pub use plan::LoadPlan;

const SAMPLE_CHANNEL_CAPACITY: usize = 1_024;
const INITIAL_SAMPLE_CAPACITY: usize = 65_536;

#[derive(Debug)]
pub struct LoadOutcome {
    /// Successful latencies in the order they completed.
    pub samples: SampleSet,
    /// Number of request tasks launched.
    pub dispatched: u64,
    /// Collection stopped early because `shutdown` resolved.
    pub interrupted: bool,
    pub elapsed: Duration,
}

impl LoadOutcome {
    /// Requests that were launched but produced no sample.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        let successful = u64::try_from(self.samples.len()).unwrap_or(u64::MAX);
        self.dispatched.saturating_sub(successful)
    }
}

/// Launches every request of `plan` at once, each sleeping a random delay
/// inside the plan's window before issuing its GET, and merges the
/// successful latencies as they arrive. `on_sample` receives the running
/// success count after every sample.
///
/// Returns once every task has finished, or as soon as `shutdown`
/// resolves; outstanding requests are aborted in that case.
pub async fn run_load<S, P>(
    plan: &LoadPlan,
    fetcher: Arc<dyn Fetcher>,
    shutdown: S,
    mut on_sample: P,
) -> LoadOutcome
where
    S: Future<Output = ()>,
    P: FnMut(u64),
{
    let run_start = Instant::now();
    let (sample_tx, mut sample_rx) = mpsc::channel::<Duration>(SAMPLE_CHANNEL_CAPACITY);
    let limiter = plan
        .max_in_flight()
        .map(|limit| Arc::new(Semaphore::new(limit.get())));
    let mut jitter = JitterSchedule::new(plan.window(), plan.seed());
    let mut tasks = JoinSet::new();

    info!(
        "Dispatching {} requests to {} over {}s",
        plan.total(),
        plan.url(),
        plan.seconds()
    );
    for index in 0..plan.total() {
        let task = RequestTask {
            index,
            url: plan.shared_url(),
            delay: jitter.next_delay(),
            fetcher: Arc::clone(&fetcher),
            limiter: limiter.clone(),
            sample_tx: sample_tx.clone(),
        };
        tasks.spawn(task.run());
    }
    // The channel closes once the last task drops its sender.
    drop(sample_tx);

    let capacity = usize::try_from(plan.total())
        .unwrap_or(usize::MAX)
        .min(INITIAL_SAMPLE_CAPACITY);
    let mut samples = SampleSet::with_capacity(capacity);
    let mut interrupted = false;

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            biased;
            () = &mut shutdown => {
                interrupted = true;
                break;
            }
            received = sample_rx.recv() => match received {
                Some(latency) => {
                    samples.push(latency);
                    on_sample(u64::try_from(samples.len()).unwrap_or(u64::MAX));
                }
                None => break,
            },
        }
    }

    if interrupted {
        warn!(
            "Interrupted with {} of {} requests collected; aborting the rest.",
            samples.len(),
            plan.total()
        );
        tasks.abort_all();
    }
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(()) => {}
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!("Request task failed: {}", err),
        }
    }

    let outcome = LoadOutcome {
        samples,
        dispatched: plan.total(),
        interrupted,
        elapsed: run_start.elapsed(),
    };
    debug!(
        "Collected {} samples, {} requests dropped, in {:?}",
        outcome.samples.len(),
        outcome.dropped(),
        outcome.elapsed
    );
    outcome
}
