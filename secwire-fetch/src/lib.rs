// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # secwire Fetch
//!
//! The correctness-critical HTTP layer for the `secwire` workspace.
//!
//! SEC EDGAR enforces strict fair-access policies on automated clients:
//! every request must carry an identification header with contact
//! information, and request rates are capped. This crate packages those
//! policies as composable pieces:
//!
//! - [`DomainGuard`] - allowlist validation before any network I/O
//! - [`RateLimiter`] - minimum spacing between request starts
//! - [`RetryPolicy`] - bounded retries with exponential backoff
//! - [`Transport`] - the swappable network seam ([`HttpTransport`] in
//!   production, call-counting doubles in tests)
//! - [`HttpClient`] - composes all of the above behind
//!   `get_text` / `get_json` / `get_bytes`
//!
//! ## Example
//!
//! ```no_run
//! use secwire_fetch::{ClientConfig, HttpClient};
//!
//! # async fn example() -> Result<(), secwire_fetch::FetchError> {
//! let config = ClientConfig::new("my-app", "contact@example.com")?;
//! let client = HttpClient::new(&config)?;
//!
//! let body = client
//!     .get_text("https://data.sec.gov/submissions/CIK0000320193.json")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod limiter;
pub mod retry;
pub mod transport;

// Re-export key types at crate root
pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::FetchError;
pub use guard::DomainGuard;
pub use limiter::RateLimiter;
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, Transport, TransportResponse};
