//! # Roles and Capability Sets
//!
//! The engine never makes authorization decisions. The caller resolves a
//! viewer's [`Role`] and [`CapabilitySet`] up front and passes them in;
//! the engine only branches on them (role-specific layout defaults,
//! capability-gated analytics).

use serde::{Deserialize, Serialize};

/// The role of a dashboard viewer.
///
/// Two roles carry administrator semantics: [`Role::Ccro`] (Chief
/// Compliance & Risk Officer) and [`Role::Administrator`]. They share a
/// distinct default section order and are the only roles permitted to
/// pin sections or curate another user's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Chief Compliance & Risk Officer — full oversight view.
    Ccro,
    /// System administrator — same layout privileges as the CCRO.
    Administrator,
    /// Owner of one or more risk records.
    RiskOwner,
    /// Owner of one or more controls.
    ControlOwner,
    /// Standard viewer with no ownership responsibilities.
    Standard,
}

impl Role {
    /// Return the string representation of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ccro => "ccro",
            Self::Administrator => "administrator",
            Self::RiskOwner => "risk_owner",
            Self::ControlOwner => "control_owner",
            Self::Standard => "standard",
        }
    }

    /// Whether this role carries administrator semantics.
    ///
    /// Administrator roles get the oversight default section order, may
    /// set pinned sections on save, and may edit other users' layouts.
    pub fn is_administrator(&self) -> bool {
        matches!(self, Self::Ccro | Self::Administrator)
    }

    /// Return all role variants.
    pub fn all() -> &'static [Role] {
        &[
            Self::Ccro,
            Self::Administrator,
            Self::RiskOwner,
            Self::ControlOwner,
            Self::Standard,
        ]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved permission set for a viewer.
///
/// Resolved by the calling context before any engine function runs; the
/// engine treats these booleans as facts and never re-derives them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// May see compliance-health analytics.
    pub view_compliance: bool,
    /// May curate other users' dashboards and set pinned sections.
    pub manage_dashboards: bool,
    /// May approve or reject pending changes.
    pub approve_changes: bool,
    /// May see the reports section.
    pub view_reports: bool,
}

impl CapabilitySet {
    /// The conventional capability grants for a role.
    ///
    /// Callers with a richer permission model supply their own set; this
    /// constructor covers the common case.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Ccro | Role::Administrator => Self {
                view_compliance: true,
                manage_dashboards: true,
                approve_changes: true,
                view_reports: true,
            },
            Role::RiskOwner | Role::ControlOwner => Self {
                view_compliance: true,
                manage_dashboards: false,
                approve_changes: false,
                view_reports: false,
            },
            Role::Standard => Self::default(),
        }
    }
}
