// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # secwire EDGAR
//!
//! SEC EDGAR specifics for the `secwire` workspace: identifier
//! normalization, endpoint construction, typed wire models, the ticker
//! directory, and the filing classifier, composed behind [`EdgarClient`].
//!
//! ## Key Types
//!
//! - [`EdgarClient`] - rate-limited client for the EDGAR APIs
//! - [`normalize_cik`] - canonical 10-digit CIK normalization
//! - [`TickerDirectory`] - lazily cached ticker-to-CIK lookup
//! - [`CompanyFacts`] / [`CompanySubmissions`] - typed API payloads
//! - [`Classifier`] / [`parse_document`] - filing format and form-type
//!   classification
//!
//! ## Example
//!
//! ```no_run
//! use secwire_edgar::EdgarClient;
//! use secwire_fetch::ClientConfig;
//!
//! # async fn example() -> Result<(), secwire_edgar::EdgarError> {
//! let config = ClientConfig::new("my-app", "contact@example.com")?;
//! let client = EdgarClient::new(&config)?;
//!
//! let cik = client.lookup_ticker("AAPL").await?;
//! let filings = client.get_company_filings(&cik).await?;
//! println!("{} recent filings", filings.filings.recent.len());
//! # Ok(())
//! # }
//! ```

pub mod cik;
pub mod classify;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod facts;
pub mod submissions;
pub mod tickers;

// Re-export key types at crate root
pub use cik::normalize_cik;
pub use classify::{Classifier, parse_document};
pub use client::EdgarClient;
pub use error::{ClassifyError, EdgarError};
pub use facts::{CompanyFacts, Concept, FactRow, Taxonomy};
pub use submissions::{CompanySubmissions, Filing, Filings, RecentFilings};
pub use tickers::TickerDirectory;
