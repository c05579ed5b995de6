//! Ticker directory entry.

use serde::{Deserialize, Serialize};

/// One row of the ticker-to-CIK directory.
///
/// The CIK is always the canonical zero-padded 10-digit form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerEntry {
    /// Market ticker symbol, uppercased (e.g. "AAPL").
    pub ticker: String,
    /// Canonical 10-digit CIK (e.g. "0000320193").
    pub cik: String,
}

impl TickerEntry {
    /// Creates a new ticker entry.
    pub fn new(ticker: impl Into<String>, cik: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            cik: cik.into(),
        }
    }
}
