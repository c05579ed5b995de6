//! Typed SEC form codes.
//!
//! EDGAR identifies every filing by a short form code ("10-K", "8-K",
//! "DEF 14A", ...). This module types the families the retrieval pipeline
//! consumes; anything rarer stays a plain string on the wire models.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Form Type
// ============================================================================

/// SEC filing form types.
///
/// Covers the common form families plus their `/A` amendments:
/// periodic reports, current reports, proxy statements, registration
/// statements, foreign-issuer reports, institutional and ownership
/// reports, and insider forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    /// Annual report (10-K)
    TenK,
    /// Amended annual report (10-K/A)
    TenKA,
    /// Quarterly report (10-Q)
    TenQ,
    /// Amended quarterly report (10-Q/A)
    TenQA,
    /// Current report (8-K)
    EightK,
    /// Amended current report (8-K/A)
    EightKA,
    /// Current report for foreign issuers (6-K)
    SixK,
    /// Amended 6-K
    SixKA,
    /// Annual report for foreign issuers (20-F)
    TwentyF,
    /// Amended 20-F
    TwentyFA,
    /// Canadian annual report (40-F)
    FortyF,
    /// Amended 40-F
    FortyFA,
    /// Definitive proxy statement
    Def14A,
    /// Definitive consent solicitation
    Def14C,
    /// IPO registration statement
    S1,
    /// Amended S-1
    S1A,
    /// Shelf registration
    S3,
    /// Amended S-3
    S3A,
    /// Business combination registration
    S4,
    /// Amended S-4
    S4A,
    /// Employee benefit plan securities
    S8,
    /// Amended S-8
    S8A,
    /// Employee benefit plan annual report (11-K)
    ElevenK,
    /// Amended 11-K
    ElevenKA,
    /// Institutional holdings report (13F-HR)
    ThirteenFHr,
    /// Amended 13F-HR
    ThirteenFHrA,
    /// Institutional holdings notice (13F-NT)
    ThirteenFNT,
    /// 5%+ ownership report (SC 13D)
    Sc13D,
    /// Amended SC 13D
    Sc13DA,
    /// Passive investor 5%+ ownership (SC 13G)
    Sc13G,
    /// Amended SC 13G
    Sc13GA,
    /// Initial insider ownership (Form 3)
    Form3,
    /// Change in insider ownership (Form 4)
    Form4,
    /// Annual insider ownership (Form 5)
    Form5,
    /// Sale of restricted securities (144)
    OneFortyFour,
    /// Exempt offering notice (Form D)
    FormD,
}

impl FormType {
    /// Returns true if this is an amended filing (a `/A` code).
    pub fn is_amendment(&self) -> bool {
        matches!(
            self,
            Self::TenKA
                | Self::TenQA
                | Self::EightKA
                | Self::SixKA
                | Self::TwentyFA
                | Self::FortyFA
                | Self::S1A
                | Self::S3A
                | Self::S4A
                | Self::S8A
                | Self::ElevenKA
                | Self::ThirteenFHrA
                | Self::Sc13DA
                | Self::Sc13GA
        )
    }

    /// Returns the base form type, stripping any `/A` amendment suffix.
    pub fn base_type(&self) -> Self {
        match self {
            Self::TenKA => Self::TenK,
            Self::TenQA => Self::TenQ,
            Self::EightKA => Self::EightK,
            Self::SixKA => Self::SixK,
            Self::TwentyFA => Self::TwentyF,
            Self::FortyFA => Self::FortyF,
            Self::S1A => Self::S1,
            Self::S3A => Self::S3,
            Self::S4A => Self::S4,
            Self::S8A => Self::S8,
            Self::ElevenKA => Self::ElevenK,
            Self::ThirteenFHrA => Self::ThirteenFHr,
            Self::Sc13DA => Self::Sc13D,
            Self::Sc13GA => Self::Sc13G,
            other => *other,
        }
    }

    /// Returns the broad regulatory category of this form.
    pub fn category(&self) -> FilingCategory {
        match self.base_type() {
            Self::TenK | Self::TenQ | Self::TwentyF | Self::FortyF | Self::ElevenK => {
                FilingCategory::PeriodicReport
            }
            Self::EightK | Self::SixK => FilingCategory::CurrentReport,
            Self::Def14A | Self::Def14C => FilingCategory::ProxyStatement,
            Self::S1 | Self::S3 | Self::S4 | Self::S8 => FilingCategory::Registration,
            Self::ThirteenFHr | Self::ThirteenFNT => FilingCategory::InstitutionalHoldings,
            Self::Sc13D | Self::Sc13G => FilingCategory::BeneficialOwnership,
            Self::Form3 | Self::Form4 | Self::Form5 => FilingCategory::InsiderTrading,
            Self::OneFortyFour | Self::FormD => FilingCategory::Offering,
            _ => FilingCategory::Other,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TenK => "10-K",
            Self::TenKA => "10-K/A",
            Self::TenQ => "10-Q",
            Self::TenQA => "10-Q/A",
            Self::EightK => "8-K",
            Self::EightKA => "8-K/A",
            Self::SixK => "6-K",
            Self::SixKA => "6-K/A",
            Self::TwentyF => "20-F",
            Self::TwentyFA => "20-F/A",
            Self::FortyF => "40-F",
            Self::FortyFA => "40-F/A",
            Self::Def14A => "DEF 14A",
            Self::Def14C => "DEF 14C",
            Self::S1 => "S-1",
            Self::S1A => "S-1/A",
            Self::S3 => "S-3",
            Self::S3A => "S-3/A",
            Self::S4 => "S-4",
            Self::S4A => "S-4/A",
            Self::S8 => "S-8",
            Self::S8A => "S-8/A",
            Self::ElevenK => "11-K",
            Self::ElevenKA => "11-K/A",
            Self::ThirteenFHr => "13F-HR",
            Self::ThirteenFHrA => "13F-HR/A",
            Self::ThirteenFNT => "13F-NT",
            Self::Sc13D => "SC 13D",
            Self::Sc13DA => "SC 13D/A",
            Self::Sc13G => "SC 13G",
            Self::Sc13GA => "SC 13G/A",
            Self::Form3 => "3",
            Self::Form4 => "4",
            Self::Form5 => "5",
            Self::OneFortyFour => "144",
            Self::FormD => "D",
        };
        write!(f, "{s}")
    }
}

impl FromStr for FormType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let up = s.trim().to_uppercase();
        match up.as_str() {
            "10-K" | "10K" => Ok(Self::TenK),
            "10-K/A" | "10K/A" => Ok(Self::TenKA),
            "10-Q" | "10Q" => Ok(Self::TenQ),
            "10-Q/A" | "10Q/A" => Ok(Self::TenQA),
            "8-K" | "8K" => Ok(Self::EightK),
            "8-K/A" | "8K/A" => Ok(Self::EightKA),
            "6-K" | "6K" => Ok(Self::SixK),
            "6-K/A" | "6K/A" => Ok(Self::SixKA),
            "20-F" | "20F" => Ok(Self::TwentyF),
            "20-F/A" | "20F/A" => Ok(Self::TwentyFA),
            "40-F" | "40F" => Ok(Self::FortyF),
            "40-F/A" | "40F/A" => Ok(Self::FortyFA),
            "DEF 14A" | "DEF14A" => Ok(Self::Def14A),
            "DEF 14C" | "DEF14C" => Ok(Self::Def14C),
            "S-1" | "S1" => Ok(Self::S1),
            "S-1/A" | "S1/A" => Ok(Self::S1A),
            "S-3" | "S3" => Ok(Self::S3),
            "S-3/A" | "S3/A" => Ok(Self::S3A),
            "S-4" | "S4" => Ok(Self::S4),
            "S-4/A" | "S4/A" => Ok(Self::S4A),
            "S-8" | "S8" => Ok(Self::S8),
            "S-8/A" | "S8/A" => Ok(Self::S8A),
            "11-K" | "11K" => Ok(Self::ElevenK),
            "11-K/A" | "11K/A" => Ok(Self::ElevenKA),
            "13F-HR" | "13FHR" => Ok(Self::ThirteenFHr),
            "13F-HR/A" | "13FHR/A" => Ok(Self::ThirteenFHrA),
            "13F-NT" => Ok(Self::ThirteenFNT),
            "SC 13D" | "SC13D" => Ok(Self::Sc13D),
            "SC 13D/A" | "SC13D/A" => Ok(Self::Sc13DA),
            "SC 13G" | "SC13G" => Ok(Self::Sc13G),
            "SC 13G/A" | "SC13G/A" => Ok(Self::Sc13GA),
            "3" => Ok(Self::Form3),
            "4" => Ok(Self::Form4),
            "5" => Ok(Self::Form5),
            "144" => Ok(Self::OneFortyFour),
            "D" => Ok(Self::FormD),
            _ => Err(CoreError::UnknownFormType(s.trim().to_string())),
        }
    }
}

// ============================================================================
// Filing Category
// ============================================================================

/// Broad regulatory category of a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilingCategory {
    /// Periodic reports (10-K, 10-Q, 20-F, ...)
    PeriodicReport,
    /// Current reports (8-K, 6-K)
    CurrentReport,
    /// Proxy statements
    ProxyStatement,
    /// Registration statements
    Registration,
    /// Institutional holdings reports
    InstitutionalHoldings,
    /// Beneficial ownership reports
    BeneficialOwnership,
    /// Insider trading reports
    InsiderTrading,
    /// Securities offering documents
    Offering,
    /// Everything else
    Other,
}

// ============================================================================
// Tests
// ============================================================================
