//! High-level EDGAR client.

use std::sync::Arc;

use secwire_core::{Document, TickerEntry};
use secwire_fetch::{ClientConfig, HttpClient, Transport};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cik::normalize_cik;
use crate::classify::Classifier;
use crate::endpoints;
use crate::error::EdgarError;
use crate::facts::CompanyFacts;
use crate::submissions::CompanySubmissions;
use crate::tickers::TickerDirectory;

/// Rate-limited client for the SEC EDGAR APIs.
///
/// Owns one [`HttpClient`] (domain guard, rate limiter, retry policy,
/// transport) and one lazily populated [`TickerDirectory`]. Configuration
/// is immutable after construction; the directory cache is the only state
/// that changes over the client's lifetime, and all methods are safe to
/// call from concurrent tasks sharing one instance.
pub struct EdgarClient {
    http: HttpClient,
    tickers: TickerDirectory,
    classifier: Classifier,
}

impl EdgarClient {
    /// Creates a client over the production transport.
    ///
    /// # Errors
    ///
    /// Fails when the TLS client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, EdgarError> {
        Ok(Self::from_http(HttpClient::new(config)?))
    }

    /// Creates a client over a caller-supplied transport (the test seam).
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::from_http(HttpClient::with_transport(config, transport))
    }

    fn from_http(http: HttpClient) -> Self {
        Self {
            http,
            tickers: TickerDirectory::new(),
            classifier: Classifier::new(),
        }
    }

    /// Replaces the document classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Returns the underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Fetches a URL and returns the body as text.
    ///
    /// # Errors
    ///
    /// Validation errors for disallowed URLs and non-retryable statuses,
    /// network errors for transport failures and retry exhaustion, parse
    /// errors for non-UTF-8 bodies.
    pub async fn fetch_text(&self, url: &str) -> Result<String, EdgarError> {
        Ok(self.http.get_text(url).await?)
    }

    /// Fetches a URL and deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// As [`EdgarClient::fetch_text`], plus a parse error for malformed
    /// JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, EdgarError> {
        Ok(self.http.get_json(url).await?)
    }

    /// Fetches a URL and returns the raw body bytes.
    ///
    /// # Errors
    ///
    /// As [`EdgarClient::fetch_text`], minus the UTF-8 decoding.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, EdgarError> {
        Ok(self.http.get_bytes(url).await?)
    }

    /// Fetches the XBRL company facts for an identifier.
    ///
    /// The identifier is normalized first, so `"320193"`,
    /// `"CIK0000320193"` and `"0000320193"` all address the same company.
    ///
    /// # Errors
    ///
    /// Validation errors for malformed identifiers, plus the
    /// [`EdgarClient::fetch_json`] failure modes.
    #[instrument(skip(self))]
    pub async fn get_company_facts(&self, identifier: &str) -> Result<CompanyFacts, EdgarError> {
        let cik = normalize_cik(identifier)?;
        let url = endpoints::company_facts_url(&cik);

        let facts: CompanyFacts = self.fetch_json(&url).await?;
        debug!(cik = %cik, entity = %facts.entity_name, taxonomies = facts.facts.len(), "company facts fetched");
        Ok(facts)
    }

    /// Fetches the filing history for an identifier.
    ///
    /// The returned payload is validated: the recent-filings parallel
    /// arrays are guaranteed to agree on length.
    ///
    /// # Errors
    ///
    /// As [`EdgarClient::get_company_facts`], plus a parse error when the
    /// parallel arrays are inconsistent.
    #[instrument(skip(self))]
    pub async fn get_company_filings(
        &self,
        identifier: &str,
    ) -> Result<CompanySubmissions, EdgarError> {
        let cik = normalize_cik(identifier)?;
        let url = endpoints::submissions_url(&cik);

        let submissions: CompanySubmissions = self.fetch_json(&url).await?;
        submissions.validate()?;
        debug!(cik = %cik, entity = %submissions.name, recent = submissions.filings.recent.len(), "company filings fetched");
        Ok(submissions)
    }

    /// Looks up the canonical CIK for a ticker, case-insensitively.
    ///
    /// The first lookup fetches the full ticker directory; later lookups
    /// hit the in-process cache.
    ///
    /// # Errors
    ///
    /// A validation error for unknown tickers; network errors when the
    /// directory cannot be loaded.
    #[instrument(skip(self))]
    pub async fn lookup_ticker(&self, ticker: &str) -> Result<String, EdgarError> {
        self.tickers.lookup(&self.http, ticker).await
    }

    /// Returns every ticker directory entry, sorted by ticker.
    ///
    /// # Errors
    ///
    /// Network errors when the directory cannot be loaded.
    pub async fn get_all_tickers(&self) -> Result<Vec<TickerEntry>, EdgarError> {
        self.tickers.all(&self.http).await
    }

    /// Fetches one document from a filing package.
    ///
    /// # Errors
    ///
    /// As [`EdgarClient::fetch_text`].
    #[instrument(skip(self))]
    pub async fn fetch_filing_document(
        &self,
        identifier: &str,
        accession_number: &str,
        document: &str,
    ) -> Result<String, EdgarError> {
        let cik = normalize_cik(identifier)?;
        let url = endpoints::filing_document_url(&cik, accession_number, document);
        self.fetch_text(&url).await
    }

    /// Classifies a filing payload with this client's classifier.
    ///
    /// # Errors
    ///
    /// A validation error when no form type can be determined, a parse
    /// error when a JSON payload lacks the expected field.
    pub fn parse_document(&self, input: &str) -> Result<Document, EdgarError> {
        Ok(self.classifier.parse(input)?)
    }
}
