//! Filing payload classification.
//!
//! One parse call inspects a raw payload and produces a
//! [`Document`]: detected structural format, extracted form type, optional
//! title, and byte size. There is no persistent state across calls.
//!
//! Detection order:
//! 1. **JSON** - the trimmed content starts with `{` or `[` *and* parses.
//! 2. **XML** - an `<?xml` declaration prefix.
//! 3. **HTML** - an `<html` or `<!doctype html` marker, or any other
//!    leading markup tag.
//! 4. **Text** - everything else.
//!
//! Form-type extraction is format-specific: JSON payloads are read through
//! a configured field list, markup and text payloads are scanned with the
//! configured token patterns. Classification fails rather than guesses;
//! downstream consumers key storage on the form type, so a fabricated
//! value would corrupt them silently.

mod patterns;

use std::sync::OnceLock;

use regex::Regex;
use secwire_core::{Document, DocumentFormat};
use serde_json::Value;
use tracing::debug;

use self::patterns::{DEFAULT_JSON_FORM_FIELDS, default_form_patterns};
use crate::error::ClassifyError;

/// HTML `<title>` element, matched case-insensitively across lines.
static TITLE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn title_pattern() -> &'static Regex {
    TITLE_PATTERN.get_or_init(|| {
        Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern must compile")
    })
}

/// Classifies raw filing payloads into [`Document`]s.
///
/// The form-type pattern table and the JSON field list are instance
/// configuration: start from the defaults and extend with
/// [`with_form_pattern`](Self::with_form_pattern) /
/// [`with_json_form_field`](Self::with_json_form_field) as coverage needs
/// grow.
#[derive(Debug, Clone)]
pub struct Classifier {
    form_patterns: Vec<Regex>,
    json_form_fields: Vec<String>,
}

impl Classifier {
    /// Creates a classifier with the default pattern table and field list.
    pub fn new() -> Self {
        Self {
            form_patterns: default_form_patterns().to_vec(),
            json_form_fields: DEFAULT_JSON_FORM_FIELDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Appends a form-type pattern.
    ///
    /// The pattern must contain exactly one capture group yielding the
    /// form code.
    ///
    /// # Errors
    ///
    /// Fails when the pattern does not compile.
    pub fn with_form_pattern(mut self, pattern: &str) -> Result<Self, ClassifyError> {
        self.form_patterns.push(Regex::new(pattern)?);
        Ok(self)
    }

    /// Appends a JSON field name consulted for the form type.
    #[must_use]
    pub fn with_json_form_field(mut self, field: impl Into<String>) -> Self {
        self.json_form_fields.push(field.into());
        self
    }

    /// Classifies a UTF-8 payload.
    ///
    /// # Errors
    ///
    /// Fails when no form type can be determined; see [`ClassifyError`].
    pub fn parse(&self, input: &str) -> Result<Document, ClassifyError> {
        let size = input.len();

        // JSON first: it is the only format with a cheap definitive check.
        let trimmed = input.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
                return self.classify_json(&value, size);
            }
            // Content merely shaped like JSON falls through to a text scan.
        }

        let format = detect_markup(input);
        let form_type = self
            .scan_form_type(input)
            .ok_or(ClassifyError::FormTypeNotFound)?;

        debug!(%format, form_type, size, "classified document");

        let mut doc = Document::new(form_type, format).with_size(size);
        if matches!(format, DocumentFormat::Html | DocumentFormat::Xml) {
            if let Some(title) = extract_title(input) {
                doc = doc.with_title(title);
            }
        }
        Ok(doc)
    }

    /// Classifies a raw byte payload.
    ///
    /// Scanning happens over a lossy UTF-8 view; the reported size is the
    /// input's byte length.
    ///
    /// # Errors
    ///
    /// As [`Classifier::parse`].
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Document, ClassifyError> {
        let text = String::from_utf8_lossy(input);
        let doc = self.parse(&text)?;
        Ok(doc.with_size(input.len()))
    }

    /// Extracts the form type and title from a parsed JSON payload.
    fn classify_json(&self, value: &Value, size: usize) -> Result<Document, ClassifyError> {
        let form_type = self
            .json_form_fields
            .iter()
            .find_map(|field| value.get(field).and_then(Value::as_str))
            .ok_or_else(|| ClassifyError::MissingFormField {
                tried: self.json_form_fields.join(", "),
            })?;

        debug!(form_type, size, "classified JSON document");

        let mut doc = Document::new(form_type, DocumentFormat::Json).with_size(size);
        if let Some(title) = value.get("entityName").and_then(Value::as_str) {
            doc = doc.with_title(title);
        }
        Ok(doc)
    }

    /// Scans text content for the first recognized form-type token.
    fn scan_form_type(&self, text: &str) -> Option<String> {
        self.form_patterns.iter().find_map(|pattern| {
            pattern
                .captures(text)
                .and_then(|captures| captures.get(1))
                .map(|token| token.as_str().trim().to_uppercase())
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Detects the markup family of a non-JSON payload.
fn detect_markup(input: &str) -> DocumentFormat {
    let trimmed = input.trim_start();

    if trimmed.starts_with("<?xml") {
        return DocumentFormat::Xml;
    }

    let lower = input.to_lowercase();
    if lower.contains("<html") || lower.contains("<!doctype html") {
        return DocumentFormat::Html;
    }

    // Anything else that leads with a tag is treated as HTML-family
    // markup; EDGAR's SGML envelopes land here and scan identically.
    if trimmed.starts_with('<') {
        return DocumentFormat::Html;
    }

    DocumentFormat::Text
}

/// Extracts the trimmed `<title>` text, when present and non-empty.
fn extract_title(input: &str) -> Option<String> {
    title_pattern()
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Classifies a payload with the default [`Classifier`].
///
/// # Errors
///
/// As [`Classifier::parse`].
pub fn parse_document(input: &str) -> Result<Document, ClassifyError> {
    static DEFAULT: OnceLock<Classifier> = OnceLock::new();
    DEFAULT.get_or_init(Classifier::new).parse(input)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_document() {
        let doc = parse_document(r#"{"submissionType":"10-K"}"#).unwrap();

        assert_eq!(doc.format, DocumentFormat::Json);
        assert_eq!(doc.form_type, "10-K");
        assert_eq!(doc.size_bytes, r#"{"submissionType":"10-K"}"#.len());
        assert!(doc.title.is_none());
    }

    #[test]
    fn test_json_document_with_entity_name() {
        let doc =
            parse_document(r#"{"submissionType":"10-Q","entityName":"Apple Inc."}"#).unwrap();

        assert_eq!(doc.form_type, "10-Q");
        assert_eq!(doc.title.as_deref(), Some("Apple Inc."));
    }

    #[test]
    fn test_json_fallback_field() {
        let doc = parse_document(r#"{"form":"8-K"}"#).unwrap();
        assert_eq!(doc.form_type, "8-K");
    }

    #[test]
    fn test_json_missing_form_field() {
        let err = parse_document(r#"{"entityName":"Apple Inc."}"#).unwrap_err();
        assert!(matches!(err, ClassifyError::MissingFormField { .. }));
    }

    #[test]
    fn test_html_document() {
        let html = "<html><body>FORM 8-K</body></html>";
        let doc = parse_document(html).unwrap();

        assert_eq!(doc.format, DocumentFormat::Html);
        assert_eq!(doc.form_type, "8-K");
        assert_eq!(doc.size_bytes, html.len());
    }

    #[test]
    fn test_html_title_extraction() {
        let html = "<html><head><title> Apple Inc. 10-K </title></head>\
                    <body>ANNUAL REPORT ON FORM 10-K</body></html>";
        let doc = parse_document(html).unwrap();

        assert_eq!(doc.form_type, "10-K");
        assert_eq!(doc.title.as_deref(), Some("Apple Inc. 10-K"));
    }

    #[test]
    fn test_xml_document() {
        let xml = r#"<?xml version="1.0"?><doc>FORM 10-Q</doc>"#;
        let doc = parse_document(xml).unwrap();

        assert_eq!(doc.format, DocumentFormat::Xml);
        assert_eq!(doc.form_type, "10-Q");
    }

    #[test]
    fn test_plain_text_document() {
        let text = "UNITED STATES SECURITIES AND EXCHANGE COMMISSION\n\
                    ANNUAL REPORT PURSUANT TO SECTION 13\n\
                    FORM 10-K\n";
        let doc = parse_document(text).unwrap();

        assert_eq!(doc.format, DocumentFormat::Text);
        assert_eq!(doc.form_type, "10-K");
    }

    #[test]
    fn test_full_text_submission_header() {
        let text = "<SEC-DOCUMENT>0000320193-23-000064.txt\n\
                    <SEC-HEADER>\n\
                    CONFORMED SUBMISSION TYPE:\t8-K\n\
                    PUBLIC DOCUMENT COUNT:\t3\n\
                    </SEC-HEADER>";
        let doc = parse_document(text).unwrap();

        assert_eq!(doc.form_type, "8-K");
    }

    #[test]
    fn test_form_type_is_uppercased() {
        let doc = parse_document("<html>quarterly report on form 10-q</html>").unwrap();
        assert_eq!(doc.form_type, "10-Q");
    }

    #[test]
    fn test_undetectable_form_type_fails() {
        let err = parse_document("<html><body>Hello world</body></html>").unwrap_err();
        assert!(matches!(err, ClassifyError::FormTypeNotFound));

        let err = parse_document("nothing filing-shaped here").unwrap_err();
        assert!(matches!(err, ClassifyError::FormTypeNotFound));
    }

    #[test]
    fn test_malformed_json_falls_through_to_text_scan() {
        // Shaped like JSON but unparseable; the token scan still finds a
        // form mention.
        let doc = parse_document("{ broken json but mentions FORM 8-K").unwrap();
        assert_eq!(doc.format, DocumentFormat::Text);
        assert_eq!(doc.form_type, "8-K");
    }

    #[test]
    fn test_custom_pattern_extends_coverage() {
        let classifier = Classifier::new()
            .with_form_pattern(r"(?i)\bFORM\s+(25(?:/A)?)\b")
            .unwrap();

        let doc = classifier.parse("<html>NOTIFICATION ON FORM 25</html>").unwrap();
        assert_eq!(doc.form_type, "25");
    }

    #[test]
    fn test_custom_json_field() {
        let classifier = Classifier::new().with_json_form_field("documentType");

        let doc = classifier.parse(r#"{"documentType":"10-K"}"#).unwrap();
        assert_eq!(doc.form_type, "10-K");
    }

    #[test]
    fn test_parse_bytes_reports_input_length() {
        let classifier = Classifier::new();
        let body = "<html><body>FORM 8-K</body></html>".as_bytes();

        let doc = classifier.parse_bytes(body).unwrap();
        assert_eq!(doc.size_bytes, body.len());
        assert_eq!(doc.form_type, "8-K");
    }

    #[test]
    fn test_no_guessing_on_empty_input() {
        assert!(parse_document("").is_err());
    }
}
