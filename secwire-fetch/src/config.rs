//! Client configuration.
//!
//! EDGAR requires automated clients to identify themselves with contact
//! information in the User-Agent header. Configuration is validated at
//! construction so a client with a non-compliant identity never exists.

use std::time::Duration;

use crate::error::FetchError;
use crate::retry::RetryPolicy;

/// Default per-attempt request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default request rate (SEC fair-access guidance).
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const USER_AGENT_ENV: &str = "SECWIRE_USER_AGENT";

/// Immutable configuration for an HTTP client.
///
/// Built once per process and shared; nothing here mutates after
/// construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    user_agent: String,
    /// Per-attempt request timeout (retries each get the full budget).
    pub timeout: Duration,
    /// Minimum spacing between request starts.
    pub min_request_interval: Duration,
    /// Retry budget and backoff parameters.
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Creates a configuration identifying as `"{app_name} {contact}"`.
    ///
    /// # Errors
    ///
    /// Fails when the combined identification string does not embed a
    /// contact address.
    pub fn new(app_name: &str, contact: &str) -> Result<Self, FetchError> {
        Self::from_user_agent(format!("{app_name} {contact}"))
    }

    /// Creates a configuration from a complete identification string.
    ///
    /// # Errors
    ///
    /// Fails when the string is empty, too short to name an application
    /// and a contact, or missing a contact address.
    pub fn from_user_agent(user_agent: impl Into<String>) -> Result<Self, FetchError> {
        let user_agent = user_agent.into();
        validate_user_agent(&user_agent)?;

        Ok(Self {
            user_agent,
            timeout: DEFAULT_TIMEOUT,
            min_request_interval: Duration::from_secs(1) / DEFAULT_REQUESTS_PER_SECOND,
            retry: RetryPolicy::default(),
        })
    }

    /// Creates a configuration from the `SECWIRE_USER_AGENT` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Fails when the variable is unset or its value fails validation.
    pub fn from_env() -> Result<Self, FetchError> {
        let user_agent = std::env::var(USER_AGENT_ENV).map_err(|_| {
            FetchError::InvalidIdentification(format!("{USER_AGENT_ENV} is not set"))
        })?;
        Self::from_user_agent(user_agent)
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the request rate as starts per second. Zero disables limiting.
    #[must_use]
    pub fn with_requests_per_second(mut self, requests: u32) -> Self {
        self.min_request_interval = if requests == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / requests
        };
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the validated identification string.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Validates an identification string against provider policy.
fn validate_user_agent(user_agent: &str) -> Result<(), FetchError> {
    if user_agent.trim().is_empty() {
        return Err(FetchError::InvalidIdentification(
            "identification string cannot be empty".into(),
        ));
    }

    if !user_agent.contains('@') {
        return Err(FetchError::InvalidIdentification(
            "identification string must include a contact address".into(),
        ));
    }

    if user_agent.len() < 10 {
        return Err(FetchError::InvalidIdentification(
            "identification string must name an application and a contact".into(),
        ));
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
