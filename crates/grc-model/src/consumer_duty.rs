//! # Consumer Duty Measures
//!
//! Outcome measures tracked under the FCA Consumer Duty. Each measure is
//! RAG-rated and sits on a periodic review cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::{Reviewable, DEFAULT_REVIEW_FREQUENCY_DAYS};
use grc_core::MeasureId;

use crate::control::RagStatus;

/// The four Consumer Duty outcome areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyOutcome {
    /// Products and services outcome.
    ProductsAndServices,
    /// Price and value outcome.
    PriceAndValue,
    /// Consumer understanding outcome.
    ConsumerUnderstanding,
    /// Consumer support outcome.
    ConsumerSupport,
}

impl DutyOutcome {
    /// Return the string representation of this outcome area.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductsAndServices => "products_and_services",
            Self::PriceAndValue => "price_and_value",
            Self::ConsumerUnderstanding => "consumer_understanding",
            Self::ConsumerSupport => "consumer_support",
        }
    }

    /// Return all outcome areas.
    pub fn all() -> &'static [DutyOutcome] {
        &[
            Self::ProductsAndServices,
            Self::PriceAndValue,
            Self::ConsumerUnderstanding,
            Self::ConsumerSupport,
        ]
    }
}

impl std::fmt::Display for DutyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Consumer Duty outcome measure from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerDutyMeasure {
    /// Unique measure identifier.
    pub id: MeasureId,
    /// Measure name.
    pub name: String,
    /// Outcome area the measure evidences.
    pub outcome: DutyOutcome,
    /// Current RAG rating.
    pub rag: RagStatus,
    /// Whether a review has been explicitly requested.
    #[serde(default)]
    pub review_requested: bool,
    /// When the measure was last reviewed.
    pub last_reviewed: Option<DateTime<Utc>>,
    /// Days between reviews; `None` means the standard cadence.
    pub review_frequency_days: Option<i64>,
}

impl Reviewable for ConsumerDutyMeasure {
    fn last_reviewed(&self) -> Option<DateTime<Utc>> {
        self.last_reviewed
    }

    fn review_frequency_days(&self) -> i64 {
        self.review_frequency_days
            .unwrap_or(DEFAULT_REVIEW_FREQUENCY_DAYS)
    }

    fn review_requested(&self) -> bool {
        self.review_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use grc_core::temporal::is_review_due;

    #[test]
    fn test_measure_review_cycle_uses_shared_classifier() {
        let now = Utc.with_ymd_and_hms(2026, 3, 28, 0, 0, 0).unwrap();
        let m = ConsumerDutyMeasure {
            id: MeasureId::new("cd-1"),
            name: "Complaint resolution time".to_string(),
            outcome: DutyOutcome::ConsumerSupport,
            rag: RagStatus::Green,
            review_requested: false,
            last_reviewed: Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
            review_frequency_days: None,
        };
        assert!(is_review_due(&m, now));
    }
}
