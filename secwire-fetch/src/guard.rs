//! Domain allowlist validation.
//!
//! Every outbound URL is checked before any network I/O: the guard sits
//! ahead of the rate limiter and retry machinery, so neither is ever
//! exercised against a disallowed endpoint.

use url::Url;

use crate::error::FetchError;

/// SEC domains allowed by default.
///
/// Suffix matching covers the production and data hosts
/// (`www.sec.gov`, `data.sec.gov`, `efts.sec.gov`).
pub const SEC_ALLOWED_DOMAINS: &[&str] = &["sec.gov"];

/// Validates that outbound URLs are absolute HTTPS and point at an
/// allowlisted domain.
#[derive(Debug, Clone)]
pub struct DomainGuard {
    domains: Vec<String>,
}

impl DomainGuard {
    /// Creates a guard with a custom allowlist.
    pub fn new(domains: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a guard for the SEC production and data hosts.
    pub fn sec() -> Self {
        Self::new(SEC_ALLOWED_DOMAINS.iter().copied())
    }

    /// Validates a URL, returning the parsed form on success.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] for malformed or non-HTTPS URLs
    /// and [`FetchError::DomainNotAllowed`] for hosts outside the allowlist.
    pub fn validate(&self, url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        if parsed.scheme() != "https" {
            return Err(FetchError::InvalidUrl(format!(
                "{url}: only HTTPS requests are permitted"
            )));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| FetchError::InvalidUrl(format!("{url}: no host")))?;

        let allowed = self
            .domains
            .iter()
            .any(|domain| host == domain || host.ends_with(&format!(".{domain}")));

        if allowed {
            Ok(parsed)
        } else {
            Err(FetchError::DomainNotAllowed(host.to_string()))
        }
    }
}

impl Default for DomainGuard {
    fn default() -> Self {
        Self::sec()
    }
}

// ============================================================================
// Tests
// ============================================================================
