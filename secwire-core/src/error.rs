//! Core error types for `secwire`.

use std::fmt;
use thiserror::Error;

/// Broad classification of a failure.
///
/// Every error in the workspace maps into exactly one of these kinds so
/// callers can branch without matching on concrete variants: a missing
/// ticker is handled differently from an unreachable host, which is handled
/// differently from a malformed response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input or disallowed request: invalid URL or domain, malformed
    /// identifier, unknown ticker, undetectable document form type.
    /// Never retried.
    Validation,
    /// Transport failures, retryable server statuses, and retry exhaustion.
    Network,
    /// Syntactically invalid payloads where a specific format was expected.
    /// Retrying cannot fix the content, so these surface immediately.
    Parse,
}

impl ErrorKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Core error type for model-level failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A form-type string did not match any known SEC form code.
    #[error("unknown form type: {0}")]
    UnknownFormType(String),

    /// A deserialized payload violated a structural guarantee.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl CoreError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFormType(_) => ErrorKind::Validation,
            Self::InvalidData(_) => ErrorKind::Parse,
        }
    }
}
