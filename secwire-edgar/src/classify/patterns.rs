//! Default form-type token patterns.
//!
//! The pattern list is configuration data, not code: each entry is a regex
//! with exactly one capture group yielding the form code. Entries are
//! tried in order and the first match wins, so more specific shapes come
//! first. [`Classifier::with_form_pattern`](super::Classifier::with_form_pattern)
//! appends instance-level entries without touching this table.

use std::sync::OnceLock;

use regex::Regex;

/// Default pattern sources, in match order.
///
/// The first group covers "FORM <code>" mentions in document text; the
/// last two cover the EDGAR full-text submission envelope (the
/// `CONFORMED SUBMISSION TYPE` header line and the SGML `<TYPE>` tag).
const DEFAULT_PATTERN_SOURCES: &[&str] = &[
    r"(?i)\bFORM\s+(10-K(?:/A)?)\b",
    r"(?i)\bFORM\s+(10-Q(?:/A)?)\b",
    r"(?i)\bFORM\s+(8-K(?:/A)?)\b",
    r"(?i)\bFORM\s+(6-K(?:/A)?)\b",
    r"(?i)\bFORM\s+(20-F(?:/A)?)\b",
    r"(?i)\bFORM\s+(40-F(?:/A)?)\b",
    r"(?i)\bFORM\s+(11-K(?:/A)?)\b",
    r"(?i)\bFORM\s+(S-[1348](?:/A)?)\b",
    r"(?i)\bFORM\s+(DEF\s?14A)\b",
    r"(?i)\bFORM\s+(13F-(?:HR|NT)(?:/A)?)\b",
    r"(?i)\bFORM\s+(SC\s?13[DG](?:/A)?)\b",
    r"(?i)\bCONFORMED\s+SUBMISSION\s+TYPE:[ \t]*([0-9A-Z][0-9A-Z/-]*(?:\s?14[AC])?)",
    r"(?i)<TYPE>[ \t]*([0-9A-Z][0-9A-Z/-]*(?:\s?14[AC])?)",
];

static DEFAULT_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Returns the compiled default pattern table.
pub(crate) fn default_form_patterns() -> &'static [Regex] {
    DEFAULT_PATTERNS.get_or_init(|| {
        DEFAULT_PATTERN_SOURCES
            .iter()
            .map(|source| Regex::new(source).expect("default pattern must compile"))
            .collect()
    })
}

/// Default JSON fields consulted for a form type, in order.
pub(crate) const DEFAULT_JSON_FORM_FIELDS: &[&str] = &["submissionType", "form"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_compile() {
        assert_eq!(default_form_patterns().len(), DEFAULT_PATTERN_SOURCES.len());
    }

    #[test]
    fn test_form_mention_capture() {
        let patterns = default_form_patterns();

        let hit = patterns
            .iter()
            .find_map(|p| p.captures("ANNUAL REPORT PURSUANT TO ... FORM 10-K/A ..."))
            .unwrap();
        assert_eq!(&hit[1], "10-K/A");
    }

    #[test]
    fn test_submission_header_capture() {
        let patterns = default_form_patterns();

        let text = "CONFORMED SUBMISSION TYPE:\t8-K\nPUBLIC DOCUMENT COUNT: 3";
        let hit = patterns.iter().find_map(|p| p.captures(text)).unwrap();
        assert_eq!(&hit[1], "8-K");
    }

    #[test]
    fn test_sgml_type_tag_capture() {
        let patterns = default_form_patterns();

        let hit = patterns
            .iter()
            .find_map(|p| p.captures("<TYPE>10-Q\n<SEQUENCE>1"))
            .unwrap();
        assert_eq!(&hit[1], "10-Q");
    }

    #[test]
    fn test_word_boundary_guards() {
        let patterns = default_form_patterns();

        // "PERFORM 10-K" must not match the FORM token patterns; the text
        // patterns require the standalone word.
        let text = "THE SYSTEM WILL PERFORM10-K NO SUCH FORM HERE";
        assert!(patterns.iter().all(|p| p.captures(text).is_none()));
    }
}
