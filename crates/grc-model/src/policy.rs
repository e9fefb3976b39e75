//! # Policy Records and Obligations
//!
//! A policy links to controls twice over: a flat `control_links` list
//! used for key-control analysis, and per-obligation control references
//! used for coverage analysis. An obligation is covered when it has a
//! direct control reference or any of its sub-sections has one.

use serde::{Deserialize, Serialize};

use grc_core::{ControlId, ObligationId, PolicyId};

/// A sub-section of an obligation, independently mappable to controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObligationSection {
    /// Section identifier within the obligation.
    pub id: ObligationId,
    /// Section title.
    pub title: String,
    /// Controls mapped to this section.
    #[serde(default)]
    pub control_refs: Vec<ControlId>,
}

/// A discrete regulatory requirement attached to a policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    /// Unique obligation identifier.
    pub id: ObligationId,
    /// Obligation title.
    pub title: String,
    /// Controls mapped directly to the obligation.
    #[serde(default)]
    pub control_refs: Vec<ControlId>,
    /// Optional subdivision into sections.
    #[serde(default)]
    pub sections: Vec<ObligationSection>,
}

impl Obligation {
    /// Whether this obligation is covered by at least one control,
    /// directly or through any of its sections.
    pub fn is_covered(&self) -> bool {
        !self.control_refs.is_empty() || self.sections.iter().any(|s| !s.control_refs.is_empty())
    }
}

/// A policy from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Unique policy identifier.
    pub id: PolicyId,
    /// Short reference code (e.g. "POL-07").
    pub reference: String,
    /// Policy name.
    pub name: String,
    /// Controls implementing this policy (ids only).
    #[serde(default)]
    pub control_links: Vec<ControlId>,
    /// Regulatory obligations attached to this policy.
    #[serde(default)]
    pub obligations: Vec<Obligation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obligation(direct: &[&str], section_refs: &[&[&str]]) -> Obligation {
        Obligation {
            id: ObligationId::new("ob-1"),
            title: "Record keeping".to_string(),
            control_refs: direct.iter().map(|c| ControlId::new(*c)).collect(),
            sections: section_refs
                .iter()
                .enumerate()
                .map(|(i, refs)| ObligationSection {
                    id: ObligationId::new(format!("ob-1.{i}")),
                    title: format!("Section {i}"),
                    control_refs: refs.iter().map(|c| ControlId::new(*c)).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_direct_reference_covers() {
        assert!(obligation(&["c-1"], &[]).is_covered());
    }

    #[test]
    fn test_section_reference_covers() {
        assert!(obligation(&[], &[&[], &["c-2"]]).is_covered());
    }

    #[test]
    fn test_no_references_is_uncovered() {
        assert!(!obligation(&[], &[]).is_covered());
        assert!(!obligation(&[], &[&[], &[]]).is_covered());
    }
}
