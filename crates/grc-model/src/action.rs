//! # Action Records
//!
//! Remediation actions with a nullable due date. An action's status can
//! explicitly say `Overdue` (set by workflow upstream) independently of
//! the date arithmetic; the shared classifier honours either signal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::temporal::Trackable;
use grc_core::{ActionId, UserId};

use crate::change::ProposedChange;

/// Lifecycle status of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// Not yet started.
    Open,
    /// Work underway.
    InProgress,
    /// Done (terminal).
    Completed,
    /// Explicitly marked overdue by upstream workflow.
    Overdue,
}

impl ActionStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remediation action from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Unique action identifier.
    pub id: ActionId,
    /// Short reference code (e.g. "A-230").
    pub reference: String,
    /// Action title.
    pub title: String,
    /// Lifecycle status.
    pub status: ActionStatus,
    /// Assigned owner, if any.
    pub owner: Option<UserId>,
    /// Due date, if one is set.
    pub due_date: Option<DateTime<Utc>>,
    /// In-flight proposed edits.
    #[serde(default)]
    pub changes: Vec<ProposedChange>,
}

impl Trackable for Action {
    fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn is_flagged_overdue(&self) -> bool {
        self.status == ActionStatus::Overdue
    }
}
