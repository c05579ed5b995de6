//! Domain models for `secwire`.
//!
//! This module contains the data types shared across the workspace:
//! - [`Document`] / [`DocumentFormat`] - classification output
//! - [`FormType`] / [`FilingCategory`] - typed SEC form codes
//! - [`TickerEntry`] - ticker directory rows

pub mod document;
pub mod form_type;
pub mod ticker;

pub use document::{Document, DocumentFormat};
pub use form_type::{FilingCategory, FormType};
pub use ticker::TickerEntry;
