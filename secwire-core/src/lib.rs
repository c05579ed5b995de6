// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `secwire` Core
//!
//! Core types, models, and the error taxonomy for the `secwire` workspace.
//!
//! This crate provides the foundational abstractions used across the other
//! `secwire` crates, including:
//!
//! - Domain models (classified documents, form types, ticker entries)
//! - The three-way error classification every failure maps into
//!
//! ## Key Types
//!
//! ### Document Types
//! - [`Document`] - Output of filing classification
//! - [`DocumentFormat`] - Structural format of a payload (HTML/JSON/Text/XML)
//! - [`FormType`] - Typed SEC form codes (10-K, 8-K, ...)
//! - [`FilingCategory`] - Broad regulatory category of a form
//!
//! ### Directory Types
//! - [`TickerEntry`] - One ticker-to-CIK mapping row
//!
//! ### Errors
//! - [`ErrorKind`] - Validation / Network / Parse classification
//! - [`CoreError`] - Model-level failures

pub mod error;
pub mod models;

// Re-export error types
pub use error::{CoreError, ErrorKind};

// Re-export all model types
pub use models::{
    // Document types
    Document,
    DocumentFormat,
    FilingCategory,
    FormType,
    // Directory types
    TickerEntry,
};
