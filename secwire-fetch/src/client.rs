//! Rate-limited, retrying HTTP client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::guard::DomainGuard;
use crate::limiter::RateLimiter;
use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, Transport, TransportResponse};

/// HTTP client enforcing the provider's access policies.
///
/// Every request runs the same pipeline: [`DomainGuard`] validation,
/// [`RateLimiter`] admission, then the [`Transport`] exchange under the
/// [`RetryPolicy`]. The guard runs first, so a disallowed URL fails before
/// the limiter or transport are ever touched.
///
/// The client is cheap to share: the limiter is the only mutable state,
/// and it serializes itself internally.
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    guard: DomainGuard,
    limiter: RateLimiter,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a client over the production HTTP transport.
    ///
    /// # Errors
    ///
    /// Fails if the TLS client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(config.user_agent(), config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over a caller-supplied transport.
    ///
    /// This is the seam test doubles plug into.
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            guard: DomainGuard::sec(),
            limiter: RateLimiter::new(config.min_request_interval),
            retry: config.retry.clone(),
        }
    }

    /// Replaces the domain guard.
    #[must_use]
    pub fn with_guard(mut self, guard: DomainGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Fetches a URL and returns the body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Validation errors for bad URLs and non-retryable statuses, network
    /// errors for transport failures and retry exhaustion, and a parse
    /// error if the body is not UTF-8.
    #[instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let body = self.get_bytes(url).await?;
        Ok(String::from_utf8(body)?)
    }

    /// Fetches a URL and deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// As [`HttpClient::get_text`], plus a parse error when the body is
    /// not valid JSON for `T`.
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a URL and returns the raw body bytes.
    ///
    /// # Errors
    ///
    /// Validation errors for bad URLs and non-retryable statuses, network
    /// errors for transport failures and retry exhaustion.
    #[instrument(skip(self))]
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.guard.validate(url)?;
        let response = self.execute(&url).await?;
        Ok(response.body)
    }

    /// Runs the rate-limited retry loop for one validated URL.
    async fn execute(&self, url: &Url) -> Result<TransportResponse, FetchError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            self.limiter.acquire().await;
            debug!(url = %url, attempt, "GET");

            let error = match self.transport.get(url).await {
                Ok(response) if response.is_success() => {
                    debug!(url = %url, status = response.status, "response received");
                    return Ok(response);
                }
                Ok(response) => FetchError::Status {
                    status: response.status,
                    url: url.to_string(),
                },
                Err(e) => e,
            };

            match self.retry.should_retry(attempt, &error) {
                Some(delay) => {
                    warn!(
                        error = %error,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                None if error.is_retryable() => {
                    return Err(FetchError::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(error),
                    });
                }
                None => return Err(error),
            }
        }
    }
}
