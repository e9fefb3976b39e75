//! # Controls-Library Statistics
//!
//! Composition of the active controls library: counts by control type,
//! latest-test outcome tallies, and policy coverage. Untested controls
//! land in a neutral `not_tested` bucket here — unlike the risk
//! insight, which treats an untested control as failing. That asymmetry
//! is deliberate and matches the observed dashboard behaviour.

use serde::{Deserialize, Serialize};

use grc_model::{Control, ControlType, Policy, RagStatus};

/// Composition of the active controls library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsLibraryStats {
    /// Number of active controls.
    pub active: usize,
    /// Active preventive controls.
    pub preventive: usize,
    /// Active detective controls.
    pub detective: usize,
    /// Active corrective controls.
    pub corrective: usize,
    /// Active directive controls.
    pub directive: usize,
    /// Active controls whose latest test was green.
    pub green: usize,
    /// Active controls whose latest test was amber.
    pub amber: usize,
    /// Active controls whose latest test was red.
    pub red: usize,
    /// Active controls with no test on record (neutral bucket).
    pub not_tested: usize,
    /// Distinct policies with at least one control link.
    pub policies_with_controls: usize,
}

/// Compute library statistics over the active controls.
///
/// Returns `None` when there are no active controls — an empty library
/// renders nothing rather than a wall of zeros.
pub fn controls_library_stats(
    controls: &[Control],
    policies: &[Policy],
) -> Option<ControlsLibraryStats> {
    let active: Vec<&Control> = controls.iter().filter(|c| c.is_active).collect();
    if active.is_empty() {
        return None;
    }

    let mut stats = ControlsLibraryStats {
        active: active.len(),
        preventive: 0,
        detective: 0,
        corrective: 0,
        directive: 0,
        green: 0,
        amber: 0,
        red: 0,
        not_tested: 0,
        policies_with_controls: policies
            .iter()
            .filter(|p| !p.control_links.is_empty())
            .count(),
    };

    for control in &active {
        match control.control_type {
            ControlType::Preventive => stats.preventive += 1,
            ControlType::Detective => stats.detective += 1,
            ControlType::Corrective => stats.corrective += 1,
            ControlType::Directive => stats.directive += 1,
        }
        match control.latest_test_result().map(|t| t.outcome) {
            Some(RagStatus::Green) => stats.green += 1,
            Some(RagStatus::Amber) => stats.amber += 1,
            Some(RagStatus::Red) => stats.red += 1,
            None => stats.not_tested += 1,
        }
    }

    Some(stats)
}
