//! Fetch error types.

use std::time::Duration;

use secwire_core::ErrorKind;
use thiserror::Error;

/// Error type for fetch operations.
///
/// Every variant maps into one of the three [`ErrorKind`]s via
/// [`FetchError::kind`], and [`FetchError::is_retryable`] drives the retry
/// loop: only transient transport failures and 429/5xx statuses qualify.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed, or is not absolute HTTPS.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL's host is outside the configured allowlist.
    #[error("domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// The identification string does not satisfy provider policy.
    #[error("invalid identification: {0}")]
    InvalidIdentification(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {status} for {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// Low-level HTTP failure from the transport.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection-level failure (reported by test doubles and adapters).
    #[error("connection failed: {0}")]
    Connection(String),

    /// The attempt exceeded the per-attempt timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The retry budget was exhausted; `source` is the final attempt's error.
    #[error("retries exhausted after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Number of attempts made.
        attempts: u32,
        /// Error from the final attempt.
        #[source]
        source: Box<FetchError>,
    },

    /// The response body was not valid JSON.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body was not valid UTF-8.
    #[error("invalid UTF-8 body: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl FetchError {
    /// Returns the broad classification of this error.
    ///
    /// Non-retryable client statuses count as validation failures: the
    /// request itself was wrong, and repeating it cannot help. 429 and 5xx
    /// are server-side conditions and classify as network failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl(_) | Self::DomainNotAllowed(_) | Self::InvalidIdentification(_) => {
                ErrorKind::Validation
            }
            Self::Status { status, .. } => {
                if *status == 429 || *status >= 500 {
                    ErrorKind::Network
                } else {
                    ErrorKind::Validation
                }
            }
            Self::Http(_) | Self::Connection(_) | Self::Timeout(_) | Self::RetriesExhausted { .. } => {
                ErrorKind::Network
            }
            Self::Json(_) | Self::Utf8(_) => ErrorKind::Parse,
        }
    }

    /// Returns true if a fresh attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::Connection(_) | Self::Timeout(_) => true,
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
