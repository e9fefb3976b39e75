//! # Risk Records
//!
//! A risk owns links to the controls that mitigate it and carries a
//! periodic review cycle. Control links are ids only; a link may point
//! at a control that no longer exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::{Reviewable, Trackable, DEFAULT_REVIEW_FREQUENCY_DAYS};
use grc_core::{ControlId, RiskId, UserId};

use crate::change::ProposedChange;

/// Lifecycle status of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    /// Actively tracked.
    Open,
    /// Under formal review.
    UnderReview,
    /// Mitigated to within appetite (terminal).
    Mitigated,
    /// Closed (terminal).
    Closed,
}

impl RiskStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::UnderReview => "under_review",
            Self::Mitigated => "mitigated",
            Self::Closed => "closed",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Mitigated | Self::Closed)
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk record from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    /// Unique risk identifier.
    pub id: RiskId,
    /// Short reference code (e.g. "R-014").
    pub reference: String,
    /// Risk name.
    pub name: String,
    /// Lifecycle status.
    pub status: RiskStatus,
    /// Owning user, if assigned.
    pub owner: Option<UserId>,
    /// Controls mitigating this risk (ids only, not integrity-checked).
    #[serde(default)]
    pub control_links: Vec<ControlId>,
    /// Whether a review has been explicitly requested.
    #[serde(default)]
    pub review_requested: bool,
    /// When the risk was last reviewed.
    pub last_reviewed: Option<DateTime<Utc>>,
    /// Days between reviews; `None` means the standard cadence.
    pub review_frequency_days: Option<i64>,
    /// Treatment due date, if one is set.
    pub due_date: Option<DateTime<Utc>>,
    /// In-flight proposed edits.
    #[serde(default)]
    pub changes: Vec<ProposedChange>,
}

impl Trackable for Risk {
    fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Reviewable for Risk {
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
