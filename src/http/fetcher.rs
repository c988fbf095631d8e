use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// Result of one GET that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    /// Time from issuing the request until the response headers arrived.
    pub latency: Duration,
}

/// Performs a single GET. Any HTTP status is a success; only transport
/// failures (DNS, connect, timeout) are errors.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Fetched, HttpError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Builds the shared client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be constructed.
    pub fn new(request_timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<Fetched, HttpError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(HttpError::from_request)?;
        let latency = start.elapsed();
        let status = response.status().as_u16();

        if let Err(err) = drain_response_body(response).await {
            debug!("Failed to drain response body: {}", err);
        }

        Ok(Fetched { status, latency })
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
