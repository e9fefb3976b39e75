//! # Risk Acceptance Records
//!
//! A risk acceptance is a time-boxed decision to run with a risk rather
//! than treat it. Acceptances move through a proposal/review/approval
//! workflow and expire; approved acceptances carry a review date that
//! drives the review buckets on the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::Trackable;
use grc_core::AcceptanceId;

/// Workflow status of a risk acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceStatus {
    /// Proposed by the risk owner.
    Proposed,
    /// Under CCRO review.
    CcroReview,
    /// Awaiting final sign-off.
    AwaitingApproval,
    /// Approved and in force.
    Approved,
    /// Lapsed (terminal).
    Expired,
}

impl AcceptanceStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::CcroReview => "ccro_review",
            Self::AwaitingApproval => "awaiting_approval",
            Self::Approved => "approved",
            Self::Expired => "expired",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Expired)
    }
}

impl std::fmt::Display for AcceptanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk acceptance from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAcceptance {
    /// Unique acceptance identifier.
    pub id: AcceptanceId,
    /// Short reference code (e.g. "RA-019").
    pub reference: String,
    /// Acceptance title.
    pub title: String,
    /// Workflow status.
    pub status: AcceptanceStatus,
    /// When an approved acceptance should next be reviewed.
    pub review_date: Option<DateTime<Utc>>,
    /// When the acceptance lapses.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Trackable for RiskAcceptance {
    fn due_date(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
