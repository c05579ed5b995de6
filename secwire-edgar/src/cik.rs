//! CIK (Central Index Key) normalization.
//!
//! The SEC assigns every filer a numeric CIK, canonically written as a
//! 10-digit zero-padded string. In the wild the same identifier appears
//! with a `CIK` prefix, without leading zeros, or with separator
//! characters; everything in this crate normalizes through here first.

use crate::error::EdgarError;

/// Canonical width of a CIK.
const CIK_WIDTH: usize = 10;

/// Separator characters tolerated inside an identifier.
const SEPARATORS: [char; 4] = ['-', '_', '.', ' '];

/// Normalizes a CIK to the canonical 10-digit zero-padded form.
///
/// Accepts an optional case-insensitive `CIK` prefix and separator
/// characters between digits. Normalization is idempotent.
///
/// # Errors
///
/// Returns [`EdgarError::InvalidCik`] when the input contains no digits,
/// contains characters other than digits and separators, or has more than
/// ten significant digits.
///
/// # Examples
///
/// ```
/// use secwire_edgar::normalize_cik;
///
/// assert_eq!(normalize_cik("320193").unwrap(), "0000320193");
/// assert_eq!(normalize_cik("CIK0000320193").unwrap(), "0000320193");
/// assert!(normalize_cik("AAPL").is_err());
/// ```
pub fn normalize_cik(raw: &str) -> Result<String, EdgarError> {
    let trimmed = raw.trim();

    let rest = if trimmed.len() >= 3 && trimmed[..3].eq_ignore_ascii_case("cik") {
        &trimmed[3..]
    } else {
        trimmed
    };

    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !SEPARATORS.contains(&c) {
            return Err(EdgarError::InvalidCik(format!(
                "unexpected character {c:?} in {raw:?}"
            )));
        }
    }

    if digits.is_empty() {
        return Err(EdgarError::InvalidCik(format!("no digits in {raw:?}")));
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > CIK_WIDTH {
        return Err(EdgarError::InvalidCik(format!(
            "more than {CIK_WIDTH} significant digits in {raw:?}"
        )));
    }

    Ok(format!("{significant:0>width$}", width = CIK_WIDTH))
}

// ============================================================================
// Tests
// ============================================================================
