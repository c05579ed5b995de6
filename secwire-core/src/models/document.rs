//! Classified document types.
//!
//! A [`Document`] is the output of one classification pass over a raw
//! filing payload: the detected structural format plus the lightweight
//! metadata downstream consumers key on. It carries no reference to the
//! source bytes; callers retain those if they need them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Document Format
// ============================================================================

/// Structural format of a filing payload.
///
/// This describes how the payload is encoded, not which SEC form it
/// contains; see [`FormType`](super::FormType) for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// HTML markup (the common case for primary filing documents).
    Html,
    /// JSON (submission metadata and API payloads).
    Json,
    /// Plain text (legacy full-text submissions).
    Text,
    /// XML with a declaration prefix (XBRL instance documents, ownership forms).
    Xml,
}

impl DocumentFormat {
    /// Returns the display name for this format.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Text => "text",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Document
// ============================================================================

/// Metadata extracted from one classified filing payload.
///
/// Classification either fully succeeds or fails; a `Document` is never
/// constructed with a guessed form type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// SEC form type code (e.g. "10-K", "8-K").
    pub form_type: String,
    /// Structural format of the payload.
    pub format: DocumentFormat,
    /// Title, when the payload carried one (HTML `<title>`, JSON entity name).
    pub title: Option<String>,
    /// Byte length of the original input.
    pub size_bytes: usize,
}

impl Document {
    /// Creates a new document with no title and zero size.
    pub fn new(form_type: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            form_type: form_type.into(),
            format,
            title: None,
            size_bytes: 0,
        }
    }

    /// Sets the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the document size in bytes.
    #[must_use]
    pub fn with_size(mut self, size_bytes: usize) -> Self {
        self.size_bytes = size_bytes;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let doc = Document::new("10-K", DocumentFormat::Html)
            .with_title("Annual Report")
            .with_size(42);

        assert_eq!(doc.form_type, "10-K");
        assert_eq!(doc.format, DocumentFormat::Html);
        assert_eq!(doc.title.as_deref(), Some("Annual Report"));
        assert_eq!(doc.size_bytes, 42);
    }

    #[test]
    fn test_format_serde_tags() {
        let json = serde_json::to_string(&DocumentFormat::Xml).unwrap();
        assert_eq!(json, "\"xml\"");

        let parsed: DocumentFormat = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(parsed, DocumentFormat::Html);
    }
}
