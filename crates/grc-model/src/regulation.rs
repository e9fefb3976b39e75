//! # Regulation Records
//!
//! Regulations carry a compliance assessment, an assessment review date,
//! and the certified persons whose certifications the regulation
//! requires. Only regulations marked applicable feed the compliance
//! health analytics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::RegulationId;

/// Compliance assessment status of a regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Assessed compliant.
    Compliant,
    /// Assessed non-compliant.
    NonCompliant,
    /// A specific gap has been identified and logged.
    GapIdentified,
    /// Assessment in progress.
    UnderReview,
}

impl ComplianceStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
            Self::GapIdentified => "gap_identified",
            Self::UnderReview => "under_review",
        }
    }

    /// Whether this status counts as a gap for health reporting.
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::NonCompliant | Self::GapIdentified)
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Certification currency of a named person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationStatus {
    /// Certification is current.
    Current,
    /// Recertification is due.
    Due,
    /// Certification has lapsed.
    Overdue,
}

impl CertificationStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Due => "due",
            Self::Overdue => "overdue",
        }
    }

    /// Whether this certification needs attention (due or lapsed).
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Due | Self::Overdue)
    }
}

impl std::fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person holding a certification required by a regulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertifiedPerson {
    /// Person's display name.
    pub name: String,
    /// Certified role title (e.g. "SMF16").
    pub role_title: String,
    /// Certification currency.
    pub status: CertificationStatus,
}

/// A regulation from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regulation {
    /// Unique regulation identifier.
    pub id: RegulationId,
    /// Short reference code (e.g. "REG-SYSC").
    pub reference: String,
    /// Regulation name.
    pub name: String,
    /// Whether this regulation applies to the firm.
    pub applicable: bool,
    /// Latest compliance assessment.
    pub compliance_status: ComplianceStatus,
    /// When the next assessment review is due.
    pub next_review_date: Option<DateTime<Utc>>,
    /// Persons holding certifications under this regulation.
    #[serde(default)]
    pub certified_persons: Vec<CertifiedPerson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_statuses() {
        assert!(ComplianceStatus::NonCompliant.is_gap());
        assert!(ComplianceStatus::GapIdentified.is_gap());
        assert!(!ComplianceStatus::Compliant.is_gap());
        assert!(!ComplianceStatus::UnderReview.is_gap());
    }

    #[test]
    fn test_certification_attention() {
        assert!(CertificationStatus::Due.needs_attention());
        assert!(CertificationStatus::Overdue.needs_attention());
        assert!(!CertificationStatus::Current.needs_attention());
    }
}
