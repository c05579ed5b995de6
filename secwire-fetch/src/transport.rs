//! The network seam.
//!
//! [`Transport`] is the one trait between the client machinery and the
//! wire, so tests can swap in scripted, call-counting doubles while
//! production uses the reqwest-backed [`HttpTransport`].

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

// ============================================================================
// Transport Response
// ============================================================================

/// Raw result of one network exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// Performs one HTTP GET exchange.
///
/// Implementations report transport-level failures (connect, timeout) as
/// errors and hand back non-success statuses as plain responses; the
/// client layer decides what a status means.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes a GET request against an already-validated URL.
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError>;
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// Production transport backed by a pooled reqwest client.
///
/// The identification header and the per-attempt timeout are fixed at
/// construction; every request issued through this transport carries them.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with the given identification string and
    /// per-attempt timeout.
    ///
    /// # Errors
    ///
    /// Fails if the underlying TLS client cannot be constructed.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { inner, timeout })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError> {
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Http(e)
            }
        };

        let response = self.inner.get(url.clone()).send().await.map_err(map_err)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_err)?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

// ============================================================================
// Tests
// ============================================================================
