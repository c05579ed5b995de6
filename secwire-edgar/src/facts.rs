//! Company facts (XBRL) wire models.
//!
//! The facts API returns every XBRL concept a company has reported,
//! grouped by taxonomy. Field optionality follows what live payloads
//! actually contain: `label` and `description` are null for deprecated
//! concepts, and fiscal-year/period fields are null on some rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Company facts payload: identity plus facts grouped by taxonomy
/// (e.g. `"us-gaap"`, `"dei"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyFacts {
    /// Numeric CIK as the API serves it (unpadded).
    pub cik: u64,
    /// Registrant name.
    #[serde(rename = "entityName")]
    pub entity_name: String,
    /// Facts keyed by taxonomy name.
    pub facts: HashMap<String, Taxonomy>,
}

impl CompanyFacts {
    /// Looks up one taxonomy by name.
    pub fn taxonomy(&self, name: &str) -> Option<&Taxonomy> {
        self.facts.get(name)
    }

    /// Looks up one concept, e.g. `("us-gaap", "Revenues")`.
    pub fn concept(&self, taxonomy: &str, tag: &str) -> Option<&Concept> {
        self.facts.get(taxonomy)?.concepts.get(tag)
    }
}

/// All concepts reported under one taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Concepts keyed by tag name.
    #[serde(flatten)]
    pub concepts: HashMap<String, Concept>,
}

/// One reported concept with its fact rows grouped by unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Human-readable label (null for deprecated concepts).
    #[serde(default)]
    pub label: Option<String>,
    /// Concept description (null for deprecated concepts).
    #[serde(default)]
    pub description: Option<String>,
    /// Fact rows keyed by unit of measure (e.g. `"USD"`, `"shares"`).
    pub units: HashMap<String, Vec<FactRow>>,
}

/// One reported fact value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactRow {
    /// Period start date, for duration facts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Period end date.
    pub end: String,
    /// Reported value (numeric for monetary concepts, string for dei).
    pub val: serde_json::Value,
    /// Accession number of the filing that reported this fact.
    pub accn: String,
    /// Fiscal year.
    #[serde(default)]
    pub fy: Option<i32>,
    /// Fiscal period (e.g. `"FY"`, `"Q2"`).
    #[serde(default)]
    pub fp: Option<String>,
    /// Form type of the reporting filing.
    pub form: String,
    /// Date the filing was made.
    pub filed: String,
    /// XBRL frame, when the fact is a frame member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
