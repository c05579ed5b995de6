//! EDGAR error types.

use secwire_core::{CoreError, ErrorKind};
use secwire_fetch::FetchError;
use thiserror::Error;

/// Error type for EDGAR operations.
///
/// Wraps the lower layers' errors and adds the identifier- and
/// directory-level failures this crate introduces. [`EdgarError::kind`]
/// preserves the three-way classification across the crate boundary.
#[derive(Debug, Error)]
pub enum EdgarError {
    /// The identifier could not be normalized into a 10-digit CIK.
    #[error("invalid CIK: {0}")]
    InvalidCik(String),

    /// The ticker is not present in the directory.
    #[error("ticker not found: {0}")]
    TickerNotFound(String),

    /// A deserialized payload violated a structural guarantee.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Failure in the HTTP layer.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Failure in a core model.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure classifying a filing payload.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

impl EdgarError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCik(_) | Self::TickerNotFound(_) => ErrorKind::Validation,
            Self::InvalidData(_) => ErrorKind::Parse,
            Self::Fetch(e) => e.kind(),
            Self::Core(e) => e.kind(),
            Self::Classify(e) => e.kind(),
        }
    }
}

/// Error type for document classification.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// No known form-type token was found in the payload.
    #[error("could not determine form type")]
    FormTypeNotFound,

    /// A JSON payload carried none of the recognized form-type fields.
    #[error("missing form-type field in JSON document (tried: {tried})")]
    MissingFormField {
        /// The field names that were consulted.
        tried: String,
    },

    /// A form-type pattern failed to compile.
    #[error("invalid form-type pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ClassifyError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            // An undetectable form type means the input is unusable, not
            // that a syntactically valid payload was mangled.
            Self::FormTypeNotFound | Self::InvalidPattern(_) => ErrorKind::Validation,
            // A well-formed JSON document missing the expected field is a
            // schema mismatch on the provider side.
            Self::MissingFormField { .. } => ErrorKind::Parse,
        }
    }
}
