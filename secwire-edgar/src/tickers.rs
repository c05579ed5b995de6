//! Ticker-to-CIK directory.
//!
//! EDGAR publishes the full ticker directory as one JSON file with more
//! than 10,000 entries. The directory is fetched lazily on first use and
//! cached for the lifetime of the owning client; concurrent first lookups
//! share a single fetch.

use std::collections::HashMap;

use secwire_core::TickerEntry;
use secwire_fetch::HttpClient;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::cik::normalize_cik;
use crate::endpoints::TICKER_DIRECTORY_URL;
use crate::error::EdgarError;

/// One row of the published directory file.
///
/// The file is keyed by row index:
/// `{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}, ...}`
#[derive(Debug, serde::Deserialize)]
struct DirectoryRow {
    cik_str: u64,
    ticker: String,
    #[serde(default)]
    #[allow(dead_code)]
    title: Option<String>,
}

/// Lazily fetched, uppercase-keyed ticker-to-CIK map.
///
/// The cache is populated at most once: `tokio::sync::OnceCell` serializes
/// racing initializers so only one network fetch runs, and a failed fetch
/// leaves the cell empty for the next caller to retry. A load failure
/// surfaces as a network-kind error, never as "ticker not found".
#[derive(Debug, Default)]
pub struct TickerDirectory {
    entries: OnceCell<HashMap<String, String>>,
}

impl TickerDirectory {
    /// Creates an empty directory; nothing is fetched until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the canonical CIK for a ticker, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`EdgarError::TickerNotFound`] for unknown tickers; network-kind
    /// errors when the directory cannot be loaded.
    pub async fn lookup(&self, http: &HttpClient, ticker: &str) -> Result<String, EdgarError> {
        let map = self.load(http).await?;
        let key = ticker.trim().to_uppercase();

        map.get(&key)
            .cloned()
            .ok_or_else(|| EdgarError::TickerNotFound(ticker.trim().to_string()))
    }

    /// Returns every directory entry, sorted by ticker.
    ///
    /// # Errors
    ///
    /// Network-kind errors when the directory cannot be loaded.
    pub async fn all(&self, http: &HttpClient) -> Result<Vec<TickerEntry>, EdgarError> {
        let map = self.load(http).await?;

        let mut entries: Vec<_> = map
            .iter()
            .map(|(ticker, cik)| TickerEntry::new(ticker.clone(), cik.clone()))
            .collect();
        entries.sort_by(|a, b| a.ticker.cmp(&b.ticker));
        Ok(entries)
    }

    /// Fetches and caches the directory on first use.
    async fn load(&self, http: &HttpClient) -> Result<&HashMap<String, String>, EdgarError> {
        self.entries
            .get_or_try_init(|| async {
                debug!(url = TICKER_DIRECTORY_URL, "loading ticker directory");

                let rows: HashMap<String, DirectoryRow> =
                    http.get_json(TICKER_DIRECTORY_URL).await?;

                let mut map = HashMap::with_capacity(rows.len());
                for row in rows.into_values() {
                    let cik = normalize_cik(&row.cik_str.to_string())?;
                    map.insert(row.ticker.to_uppercase(), cik);
                }

                debug!(entries = map.len(), "ticker directory loaded");
                Ok(map)
            })
            .await
    }
}
