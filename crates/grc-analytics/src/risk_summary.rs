//! # Risk & Action Summary
//!
//! Headline counts over the risk register and action list. All date
//! classification goes through `grc_core::temporal`, so "overdue" and
//! "due soon" here agree with every other widget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::{is_due_soon, is_overdue, is_review_due, DUE_SOON_HORIZON_DAYS};
use grc_model::{Action, Risk, RiskStatus};

/// Headline counts for the risk summary widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// All risks on the register.
    pub total: usize,
    /// Risks with status open.
    pub open: usize,
    /// Risks under formal review.
    pub under_review: usize,
    /// Risks mitigated to within appetite.
    pub mitigated: usize,
    /// Closed risks.
    pub closed: usize,
    /// Actions past their due date (or explicitly flagged overdue).
    pub overdue_actions: usize,
    /// Actions due within the shared horizon, not yet overdue.
    pub due_soon_actions: usize,
    /// Non-terminal risks whose periodic review has come due.
    pub reviews_due: usize,
}

/// Compute the risk summary over the register and action list.
pub fn risk_summary(risks: &[Risk], actions: &[Action], now: DateTime<Utc>) -> RiskSummary {
    let mut summary = RiskSummary {
        total: risks.len(),
        open: 0,
        under_review: 0,
        mitigated: 0,
        closed: 0,
        overdue_actions: 0,
        due_soon_actions: 0,
        reviews_due: 0,
    };

    for risk in risks {
        match risk.status {
            RiskStatus::Open => summary.open += 1,
            RiskStatus::UnderReview => summary.under_review += 1,
            RiskStatus::Mitigated => summary.mitigated += 1,
            RiskStatus::Closed => summary.closed += 1,
        }
        if !risk.status.is_terminal() && is_review_due(risk, now) {
            summary.reviews_due += 1;
        }
    }

    for action in actions {
        if is_overdue(action, now) {
            summary.overdue_actions += 1;
        } else if is_due_soon(action, now, DUE_SOON_HORIZON_DAYS) {
            summary.due_soon_actions += 1;
        }
    }

    summary
}
