use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::time::sleep;
use tracing::debug;

use crate::http::Fetcher;

/// One GET: wait out the jitter delay, then send the latency on success.
/// Failures end the task without a sample.
pub(super) struct RequestTask {
    pub(super) index: u64,
    pub(super) url: Arc<str>,
    pub(super) delay: Duration,
    pub(super) fetcher: Arc<dyn Fetcher>,
    pub(super) limiter: Option<Arc<Semaphore>>,
    pub(super) sample_tx: mpsc::Sender<Duration>,
}

impl RequestTask {
    pub(super) async fn run(self) {
        sleep(self.delay).await;

        let _permit = match self.limiter {
            Some(limiter) => match limiter.acquire_owned().await {
                Ok(permit) => Some(permit),
                Err(_) => return,
            },
            None => None,
        };

        match self.fetcher.fetch(&self.url).await {
            Ok(fetched) => {
                if self.sample_tx.send(fetched.latency).await.is_err() {
                    debug!(request = self.index, "Collector closed before sample arrived");
                }
            }
            Err(err) => {
                debug!(request = self.index, "Request dropped: {}", err);
            }
        }
    }
}
