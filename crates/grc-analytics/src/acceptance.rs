//! # Risk-Acceptance Statistics
//!
//! Partitions the acceptance register by workflow status, surfaces the
//! most urgent items, and buckets approved acceptances by how far away
//! their review date is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::days_until;
use grc_core::AcceptanceId;
use grc_model::{AcceptanceStatus, RiskAcceptance};

/// Maximum entries in the urgent list.
pub const URGENT_CAP: usize = 3;

/// Upper bound (inclusive, in days) of the near-term review bucket.
pub const REVIEW_NEAR_TERM_DAYS: i64 = 30;

/// Light projection of an acceptance for display lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceRef {
    /// Acceptance identifier.
    pub id: AcceptanceId,
    /// Short reference code.
    pub reference: String,
    /// Acceptance title.
    pub title: String,
}

impl AcceptanceRef {
    fn of(ra: &RiskAcceptance) -> Self {
        Self {
            id: ra.id.clone(),
            reference: ra.reference.clone(),
            title: ra.title.clone(),
        }
    }
}

/// An approved acceptance placed in a review bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewBucketEntry {
    /// Acceptance identifier.
    pub id: AcceptanceId,
    /// Short reference code.
    pub reference: String,
    /// Acceptance title.
    pub title: String,
    /// Whole days until the review date (negative = overdue).
    pub days_until: i64,
}

/// Summary of the risk-acceptance register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceStats {
    /// Lapsed acceptances.
    pub expired: usize,
    /// Acceptances awaiting final sign-off.
    pub awaiting_approval: usize,
    /// Acceptances still in the proposal pipeline (proposed + CCRO
    /// review, merged).
    pub in_review: usize,
    /// Acceptances currently in force.
    pub approved: usize,
    /// The most urgent items: expired first, then awaiting approval,
    /// capped at [`URGENT_CAP`]. Original register order within each
    /// group.
    pub urgent: Vec<AcceptanceRef>,
    /// Approved acceptances whose review date has passed, soonest-lapsed
    /// last (ascending `days_until`).
    pub review_overdue: Vec<ReviewBucketEntry>,
    /// Approved acceptances due for review within
    /// [`REVIEW_NEAR_TERM_DAYS`], ascending.
    pub review_due_30: Vec<ReviewBucketEntry>,
    /// Approved acceptances with a review date beyond the near-term
    /// window, ascending.
    pub review_beyond_30: Vec<ReviewBucketEntry>,
}

/// Compute acceptance statistics over the full register.
pub fn acceptance_stats(acceptances: &[RiskAcceptance], now: DateTime<Utc>) -> AcceptanceStats {
    let mut expired = 0;
    let mut awaiting_approval = 0;
    let mut in_review = 0;
    let mut approved = 0;

    for ra in acceptances {
        match ra.status {
            AcceptanceStatus::Expired => expired += 1,
            AcceptanceStatus::AwaitingApproval => awaiting_approval += 1,
            AcceptanceStatus::Proposed | AcceptanceStatus::CcroReview => in_review += 1,
            AcceptanceStatus::Approved => approved += 1,
        }
    }

    // Expired items lead the urgent list; register order is preserved
    // within each group.
    let mut urgent: Vec<AcceptanceRef> = acceptances
        .iter()
        .filter(|ra| ra.status == AcceptanceStatus::Expired)
        .map(AcceptanceRef::of)
        .collect();
    urgent.extend(
        acceptances
            .iter()
            .filter(|ra| ra.status == AcceptanceStatus::AwaitingApproval)
            .map(AcceptanceRef::of),
    );
    urgent.truncate(URGENT_CAP);

    let mut review_overdue = Vec::new();
    let mut review_due_30 = Vec::new();
    let mut review_beyond_30 = Vec::new();
    for ra in acceptances {
        if ra.status != AcceptanceStatus::Approved {
            continue;
        }
        let Some(days) = days_until(ra.review_date, now) else {
            continue;
        };
        let entry = ReviewBucketEntry {
            id: ra.id.clone(),
            reference: ra.reference.clone(),
            title: ra.title.clone(),
            days_until: days,
        };
        if days < 0 {
            review_overdue.push(entry);
        } else if days <= REVIEW_NEAR_TERM_DAYS {
            review_due_30.push(entry);
        } else {
            review_beyond_30.push(entry);
        }
    }
    review_overdue.sort_by_key(|e| e.days_until);
    review_due_30.sort_by_key(|e| e.days_until);
    review_beyond_30.sort_by_key(|e| e.days_until);

    AcceptanceStats {
        expired,
        awaiting_approval,
        in_review,
        approved,
        urgent,
        review_overdue,
        review_due_30,
        review_beyond_30,
    }
}
