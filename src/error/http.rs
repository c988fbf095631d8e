use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("Simulated transport failure.")]
    Simulated,
}

impl HttpError {
    pub(crate) fn from_request(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            HttpError::Timeout { source }
        } else {
            HttpError::Transport { source }
        }
    }
}
