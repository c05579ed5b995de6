//! Company submissions wire models.
//!
//! The submissions API returns a company profile plus its filing history
//! as parallel arrays: index N of every array describes the Nth filing.
//! [`RecentFilings::validate`] enforces the equal-length guarantee after
//! deserialization, before any row is handed out.

use chrono::NaiveDate;
use secwire_core::{CoreError, FormType};
use serde::{Deserialize, Serialize};

/// Company submissions payload: registrant metadata and filing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySubmissions {
    /// Canonical zero-padded CIK.
    pub cik: String,
    /// Registrant name.
    pub name: String,
    /// Entity type (e.g. "operating").
    #[serde(default)]
    pub entity_type: Option<String>,
    /// Standard Industrial Classification code.
    #[serde(default)]
    pub sic: Option<String>,
    /// SIC description.
    #[serde(default)]
    pub sic_description: Option<String>,
    /// Trading ticker symbols.
    #[serde(default)]
    pub tickers: Vec<String>,
    /// Exchanges where traded.
    #[serde(default)]
    pub exchanges: Vec<String>,
    /// Filing history.
    pub filings: Filings,
}

impl CompanySubmissions {
    /// Checks the structural guarantees of the payload.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidData`] when the recent-filings parallel
    /// arrays disagree on length.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.filings.recent.validate()
    }

    /// Builds typed records for all recent filings.
    ///
    /// # Errors
    ///
    /// Fails when the parallel arrays are inconsistent or a filing date is
    /// not an ISO date.
    pub fn recent_filings(&self) -> Result<Vec<Filing>, CoreError> {
        self.filings.recent.validate()?;
        (0..self.filings.recent.len())
            .map(|idx| self.filings.recent.build_row(idx))
            .collect()
    }

    /// Builds typed records for recent filings of one form type.
    ///
    /// # Errors
    ///
    /// As [`CompanySubmissions::recent_filings`].
    pub fn filings_of_type(&self, form: FormType) -> Result<Vec<Filing>, CoreError> {
        let code = form.to_string();
        self.filings.recent.validate()?;
        (0..self.filings.recent.len())
            .filter(|&idx| self.filings.recent.form[idx] == code)
            .map(|idx| self.filings.recent.build_row(idx))
            .collect()
    }
}

/// Container for filing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filings {
    /// The most recent filings (newest first).
    pub recent: RecentFilings,
    /// Older filings, available as separate archive pages.
    #[serde(default)]
    pub files: Vec<ArchivePage>,
}

/// Recent filings as parallel arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilings {
    /// Accession numbers.
    pub accession_number: Vec<String>,
    /// Filing dates (ISO, `YYYY-MM-DD`).
    pub filing_date: Vec<String>,
    /// Report dates (may be empty strings).
    #[serde(default)]
    pub report_date: Vec<String>,
    /// Form type codes.
    pub form: Vec<String>,
    /// Primary document filenames.
    pub primary_document: Vec<String>,
    /// Primary document descriptions.
    #[serde(default)]
    pub primary_doc_description: Vec<String>,
    /// Items reported (8-K only; empty otherwise).
    #[serde(default)]
    pub items: Vec<String>,
    /// Filing sizes in bytes.
    #[serde(default)]
    pub size: Vec<i64>,
}

impl RecentFilings {
    /// Number of filings described by the arrays.
    pub fn len(&self) -> usize {
        self.form.len()
    }

    /// Returns true when no filings are present.
    pub fn is_empty(&self) -> bool {
        self.form.is_empty()
    }

    /// Checks that the parallel arrays agree on length.
    ///
    /// Required arrays must all match; optional arrays must either be
    /// absent (empty) or match too.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidData`] naming the offending array.
    pub fn validate(&self) -> Result<(), CoreError> {
        let expected = self.form.len();

        let required = [
            ("accessionNumber", self.accession_number.len()),
            ("filingDate", self.filing_date.len()),
            ("primaryDocument", self.primary_document.len()),
        ];
        for (name, len) in required {
            if len != expected {
                return Err(CoreError::InvalidData(format!(
                    "parallel array {name} has {len} entries, expected {expected}"
                )));
            }
        }

        let optional = [
            ("reportDate", self.report_date.len()),
            ("primaryDocDescription", self.primary_doc_description.len()),
            ("items", self.items.len()),
            ("size", self.size.len()),
        ];
        for (name, len) in optional {
            if len != 0 && len != expected {
                return Err(CoreError::InvalidData(format!(
                    "parallel array {name} has {len} entries, expected {expected}"
                )));
            }
        }

        Ok(())
    }

    /// Builds the typed record at one index. Callers validate lengths first.
    fn build_row(&self, idx: usize) -> Result<Filing, CoreError> {
        let filing_date = NaiveDate::parse_from_str(&self.filing_date[idx], "%Y-%m-%d")
            .map_err(|e| {
                CoreError::InvalidData(format!(
                    "bad filing date {:?}: {e}",
                    self.filing_date[idx]
                ))
            })?;

        Ok(Filing {
            accession_number: self.accession_number[idx].clone(),
            form: self.form[idx].clone(),
            filing_date,
            primary_document: self.primary_document[idx].clone(),
        })
    }
}

/// Metadata for one archive page of older filings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivePage {
    /// Archive filename.
    pub name: String,
    /// Number of filings in the archive.
    pub filing_count: i32,
    /// Earliest filing date.
    pub filing_from: String,
    /// Latest filing date.
    pub filing_to: String,
}

/// One typed filing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filing {
    /// Accession number (e.g. "0000320193-23-000106").
    pub accession_number: String,
    /// Form type code as filed.
    pub form: String,
    /// Date the filing was made.
    pub filing_date: NaiveDate,
    /// Primary document filename.
    pub primary_document: String,
}

// ============================================================================
// Tests
// ============================================================================
