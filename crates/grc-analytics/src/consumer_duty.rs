//! # Consumer Duty Summary
//!
//! RAG tallies and review pressure across the Consumer Duty outcome
//! measures. Absent when no measures are tracked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::is_review_due;
use grc_model::{ConsumerDutyMeasure, RagStatus};

/// Summary of the Consumer Duty measure set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerDutySummary {
    /// Measures tracked.
    pub total: usize,
    /// Measures rated red.
    pub red: usize,
    /// Measures rated amber.
    pub amber: usize,
    /// Measures rated green.
    pub green: usize,
    /// Measures whose periodic review has come due.
    pub reviews_due: usize,
}

/// Summarise the Consumer Duty measures, or `None` when none exist.
pub fn consumer_duty_summary(
    measures: &[ConsumerDutyMeasure],
    now: DateTime<Utc>,
) -> Option<ConsumerDutySummary> {
    if measures.is_empty() {
        return None;
    }

    let mut summary = ConsumerDutySummary {
        total: measures.len(),
        red: 0,
        amber: 0,
        green: 0,
        reviews_due: 0,
    };

    for measure in measures {
        match measure.rag {
            RagStatus::Red => summary.red += 1,
            RagStatus::Amber => summary.amber += 1,
            RagStatus::Green => summary.green += 1,
        }
        if is_review_due(measure, now) {
            summary.reviews_due += 1;
        }
    }

    Some(summary)
}
