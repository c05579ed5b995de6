//! EDGAR endpoint URL construction.
//!
//! All URLs this crate requests are built here, against the hosts the
//! fetch layer allowlists. API endpoints take the canonical zero-padded
//! CIK; archive paths use the unpadded form EDGAR serves.

/// Company facts API base.
pub const FACTS_BASE: &str = "https://data.sec.gov/api/xbrl/companyfacts";

/// Company submissions API base.
pub const SUBMISSIONS_BASE: &str = "https://data.sec.gov/submissions";

/// Full ticker-to-CIK directory.
pub const TICKER_DIRECTORY_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// Filing archives base.
pub const ARCHIVES_BASE: &str = "https://www.sec.gov/Archives/edgar/data";

/// Builds the company facts URL for a canonical CIK.
pub fn company_facts_url(cik: &str) -> String {
    format!("{FACTS_BASE}/CIK{cik}.json")
}

/// Builds the company submissions URL for a canonical CIK.
pub fn submissions_url(cik: &str) -> String {
    format!("{SUBMISSIONS_BASE}/CIK{cik}.json")
}

/// Builds the URL of a filing's index page.
///
/// The index page lists every document inside the filing package.
pub fn filing_index_url(cik: &str, accession_number: &str) -> String {
    format!(
        "{ARCHIVES_BASE}/{}/{}-index.html",
        archive_cik(cik),
        accession_number.replace('-', "")
    )
}

/// Builds the URL of one document inside a filing package.
pub fn filing_document_url(cik: &str, accession_number: &str, document: &str) -> String {
    format!(
        "{ARCHIVES_BASE}/{}/{}/{document}",
        archive_cik(cik),
        accession_number.replace('-', "")
    )
}

/// Builds the URL of the complete filing as a single text file.
pub fn full_text_url(cik: &str, accession_number: &str) -> String {
    format!("{ARCHIVES_BASE}/{}/{accession_number}.txt", archive_cik(cik))
}

/// Archives paths use the CIK without leading zeros.
fn archive_cik(cik: &str) -> &str {
    let trimmed = cik.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_facts_url() {
        assert_eq!(
            company_facts_url("0000320193"),
            "https://data.sec.gov/api/xbrl/companyfacts/CIK0000320193.json"
        );
    }

    #[test]
    fn test_submissions_url() {
        assert_eq!(
            submissions_url("0000320193"),
            "https://data.sec.gov/submissions/CIK0000320193.json"
        );
    }

    #[test]
    fn test_filing_index_url() {
        assert_eq!(
            filing_index_url("0000320193", "0000320193-23-000077"),
            "https://www.sec.gov/Archives/edgar/data/320193/000032019323000077-index.html"
        );
    }

    #[test]
    fn test_filing_document_url() {
        assert_eq!(
            filing_document_url("0000320193", "0000320193-23-000077", "aapl-20230930.htm"),
            "https://www.sec.gov/Archives/edgar/data/320193/000032019323000077/aapl-20230930.htm"
        );
    }

    #[test]
    fn test_full_text_url() {
        assert_eq!(
            full_text_url("0000320193", "0000320193-23-000077"),
            "https://www.sec.gov/Archives/edgar/data/320193/0000320193-23-000077.txt"
        );
    }

    #[test]
    fn test_archive_paths_accept_padded_and_unpadded_ciks() {
        assert_eq!(
            filing_index_url("320193", "0000320193-23-000077"),
            filing_index_url("0000320193", "0000320193-23-000077")
        );
    }
}
