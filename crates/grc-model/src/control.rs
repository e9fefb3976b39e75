//! # Control Records and Test Results
//!
//! Controls carry their testing history inline. The "current" outcome of
//! a control is the outcome of its most recent test; a control with no
//! tests has no current outcome, and what that absence means is decided
//! by the consumer (the risk-insight path treats it as a failure, the
//! library statistics as a neutral "not tested" bucket).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grc_core::ControlId;

use crate::change::ProposedChange;

/// The four control categories in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    /// Stops the event from occurring.
    Preventive,
    /// Identifies the event after it occurs.
    Detective,
    /// Remedies the event after detection.
    Corrective,
    /// Mandates behaviour through policy or instruction.
    Directive,
}

impl ControlType {
    /// Return the string representation of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Detective => "detective",
            Self::Corrective => "corrective",
            Self::Directive => "directive",
        }
    }

    /// Return all control type variants.
    pub fn all() -> &'static [ControlType] {
        &[
            Self::Preventive,
            Self::Detective,
            Self::Corrective,
            Self::Directive,
        ]
    }
}

impl std::fmt::Display for ControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Red/amber/green classification for test results and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RagStatus {
    /// Failing.
    Red,
    /// Degraded but not failing.
    Amber,
    /// Operating as intended.
    Green,
}

impl RagStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Amber => "amber",
            Self::Green => "green",
        }
    }

    /// Whether this outcome counts as a failure.
    ///
    /// Only red counts; amber is degraded-but-passing for every consumer
    /// in the engine.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Red)
    }
}

impl std::fmt::Display for RagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One test of a control's operating effectiveness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlTestResult {
    /// When the test was performed.
    pub tested_at: DateTime<Utc>,
    /// RAG outcome of the test.
    pub outcome: RagStatus,
    /// Tester's notes, if any.
    pub notes: Option<String>,
}

/// A control from the controls library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    /// Unique control identifier.
    pub id: ControlId,
    /// Short reference code (e.g. "C-103").
    pub reference: String,
    /// Control name.
    pub name: String,
    /// Library category.
    pub control_type: ControlType,
    /// Whether the control is currently in operation. Inactive controls
    /// are excluded from library statistics.
    pub is_active: bool,
    /// Testing history, in no guaranteed order.
    #[serde(default)]
    pub test_results: Vec<ControlTestResult>,
    /// In-flight proposed edits.
    #[serde(default)]
    pub changes: Vec<ProposedChange>,
}

impl Control {
    /// The most recent test result, by test date.
    pub fn latest_test_result(&self) -> Option<&ControlTestResult> {
        self.test_results.iter().max_by_key(|t| t.tested_at)
    }
}
