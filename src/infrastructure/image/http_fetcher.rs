//! HTTP-backed image fetch adapter.

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::ports::{FetchError, FetchResult, ImageFetchPort};
use crate::infrastructure::config::ResolverConfig;

/// Verifies image URLs with a plain GET through `reqwest`.
///
/// Success means a 2xx response; the body is discarded. The client
/// carries the configured timeout so the resolver layer does not have
/// to impose one.
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Request` if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::Request(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Creates a fetcher using the timeout from a resolver configuration.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, FetchError> {
        Self::new(config.fetch_timeout_secs)
    }
}

#[async_trait]
impl ImageFetchPort for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            trace!(url, "Image URL verified");
            Ok(())
        } else {
            Err(FetchError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_configured_timeout() {
        assert!(HttpImageFetcher::new(5).is_ok());
        assert!(HttpImageFetcher::from_config(&ResolverConfig::default()).is_ok());
    }
}
