//! # Embedded Proposed Changes
//!
//! Mutable entity types carry their in-flight edits as an embedded list
//! of proposed changes. A change stays `Pending` until a reviewer
//! approves or rejects it through the external store; the engine only
//! ever reads these records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::{ChangeId, UserId};

/// Review status of a proposed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Awaiting reviewer decision.
    Pending,
    /// Applied to the parent entity.
    Approved,
    /// Declined; the proposal is kept for audit.
    Rejected,
}

impl ChangeStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed edit to the parent entity, awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedChange {
    /// Unique change identifier.
    pub id: ChangeId,
    /// Human-readable summary of what the change does.
    pub summary: String,
    /// Review status.
    pub status: ChangeStatus,
    /// Who proposed the change.
    pub proposed_by: UserId,
    /// When the change was proposed.
    pub proposed_at: DateTime<Utc>,
}

impl ProposedChange {
    /// Whether this change is still awaiting review.
    pub fn is_pending(&self) -> bool {
        self.status == ChangeStatus::Pending
    }
}
