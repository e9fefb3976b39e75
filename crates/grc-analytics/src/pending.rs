//! # Pending-Change Collection
//!
//! Flattens the in-flight proposed edits embedded across risks, actions,
//! and controls into a single review queue, newest proposal first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::ChangeId;
use grc_model::{Action, Control, Risk};

/// Which entity collection a pending change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A risk record.
    Risk,
    /// A remediation action.
    Action,
    /// A control.
    Control,
}

impl EntityKind {
    /// Return the string representation of this entity kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Action => "action",
            Self::Control => "control",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending change paired with enough parent context to render a
/// review row without a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingChange {
    /// Change identifier.
    pub id: ChangeId,
    /// Which collection the parent lives in.
    pub entity: EntityKind,
    /// Parent entity identifier.
    pub parent_id: String,
    /// Parent display title or name.
    pub parent_title: String,
    /// Parent short reference code.
    pub parent_reference: String,
    /// When the change was proposed.
    pub proposed_at: DateTime<Utc>,
}

/// Collect every pending change across the three mutable collections,
/// sorted newest-first. Ties on the timestamp keep collection order
/// (risks, then actions, then controls).
pub fn collect_pending_changes(
    risks: &[Risk],
    actions: &[Action],
    controls: &[Control],
) -> Vec<PendingChange> {
    let mut out: Vec<PendingChange> = Vec::new();

    for risk in risks {
        out.extend(risk.changes.iter().filter(|c| c.is_pending()).map(|c| {
            PendingChange {
                id: c.id.clone(),
                entity: EntityKind::Risk,
                parent_id: risk.id.as_str().to_string(),
                parent_title: risk.name.clone(),
                parent_reference: risk.reference.clone(),
                proposed_at: c.proposed_at,
            }
        }));
    }
    for action in actions {
        out.extend(action.changes.iter().filter(|c| c.is_pending()).map(|c| {
            PendingChange {
                id: c.id.clone(),
                entity: EntityKind::Action,
                parent_id: action.id.as_str().to_string(),
                parent_title: action.title.clone(),
                parent_reference: action.reference.clone(),
                proposed_at: c.proposed_at,
            }
        }));
    }
    for control in controls {
        out.extend(control.changes.iter().filter(|c| c.is_pending()).map(|c| {
            PendingChange {
                id: c.id.clone(),
                entity: EntityKind::Control,
                parent_id: control.id.as_str().to_string(),
                parent_title: control.name.clone(),
                parent_reference: control.reference.clone(),
                proposed_at: c.proposed_at,
            }
        }));
    }

    out.sort_by(|a, b| b.proposed_at.cmp(&a.proposed_at));
    out
}

/// Count pending changes without materialising the queue.
pub fn pending_change_count(risks: &[Risk], actions: &[Action], controls: &[Control]) -> usize {
    let risks = risks
        .iter()
        .flat_map(|r| r.changes.iter())
        .filter(|c| c.is_pending())
        .count();
    let actions = actions
        .iter()
        .flat_map(|a| a.changes.iter())
        .filter(|c| c.is_pending())
        .count();
    let controls = controls
        .iter()
        .flat_map(|c| c.changes.iter())
        .filter(|c| c.is_pending())
        .count();
    risks + actions + controls
}
