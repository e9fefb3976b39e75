//! # Section Registry
//!
//! The static registry of dashboard sections and their elements. The
//! registry is versioned outside this engine; saved layouts routinely
//! disagree with it, which is why [`SectionKey`] is an open string
//! newtype while [`SectionKind`] is a closed enum — a saved layout can
//! carry any key, but every key the registry defines has a kind, and a
//! `match` on `SectionKind` is exhaustive. Adding a section forces every
//! consumer to handle it at compile time.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use grc_core::{ElementId, Role};

use crate::config::GridItem;

/// A stable string identifier for a top-level dashboard section.
///
/// Open set: saved layouts may carry keys the current registry no
/// longer defines. Such keys are ignored during resolution, never
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    /// Wrap a section key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Access the raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The closed set of section kinds this engine can render.
///
/// One variant per registered section. The registry maps each kind to
/// its stable key; rendering dispatch matches on the kind, so a section
/// without a handler is a compile error, not a blank widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Greeting and headline figures.
    Welcome,
    /// Unread notifications and the pending-change badge.
    Notifications,
    /// Pending changes awaiting the viewer's approval.
    ActionRequired,
    /// Risk register summary.
    RiskSummary,
    /// The viewer's open and overdue actions.
    ActionsSummary,
    /// Controls library statistics.
    ControlsLibrary,
    /// Regulatory compliance health.
    ComplianceHealth,
    /// Risk acceptance workflow and review buckets.
    RiskAcceptances,
    /// Consumer Duty outcome measures.
    ConsumerDuty,
    /// Cross-entity insights (failing controls, coverage gaps, key controls).
    Insights,
    /// Report library.
    Reports,
    /// User administration (administrator-only widget).
    UserManagement,
}

impl SectionKind {
    /// The stable registry key for this kind.
    pub fn key(&self) -> SectionKey {
        SectionKey::new(self.key_str())
    }

    /// The stable registry key as a static string.
    pub fn key_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Notifications => "notifications",
            Self::ActionRequired => "action-required",
            Self::RiskSummary => "risk-summary",
            Self::ActionsSummary => "actions-summary",
            Self::ControlsLibrary => "controls-library",
            Self::ComplianceHealth => "compliance-health",
            Self::RiskAcceptances => "risk-acceptances",
            Self::ConsumerDuty => "consumer-duty",
            Self::Insights => "insights",
            Self::Reports => "reports",
            Self::UserManagement => "user-management",
        }
    }

    /// Display title for the section header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Notifications => "Notifications",
            Self::ActionRequired => "Action Required",
            Self::RiskSummary => "Risk Summary",
            Self::ActionsSummary => "My Actions",
            Self::ControlsLibrary => "Controls Library",
            Self::ComplianceHealth => "Compliance Health",
            Self::RiskAcceptances => "Risk Acceptances",
            Self::ConsumerDuty => "Consumer Duty",
            Self::Insights => "Insights",
            Self::Reports => "Reports",
            Self::UserManagement => "User Management",
        }
    }

    /// All section kinds, in standard registry order.
    pub fn all() -> &'static [SectionKind] {
        &[
            Self::Welcome,
            Self::Notifications,
            Self::ActionRequired,
            Self::RiskSummary,
            Self::ActionsSummary,
            Self::ControlsLibrary,
            Self::ComplianceHealth,
            Self::RiskAcceptances,
            Self::ConsumerDuty,
            Self::Insights,
            Self::Reports,
            Self::UserManagement,
        ]
    }

    /// The element ids registered for this section.
    ///
    /// Elements are the independently orderable/hideable sub-parts of a
    /// section (individual stat cards, lists).
    pub fn element_ids(&self) -> &'static [&'static str] {
        match self {
            Self::Welcome => &[],
            Self::Notifications => &["unread", "pending-changes"],
            Self::ActionRequired => &["approval-queue"],
            Self::RiskSummary => &["totals", "overdue-actions", "reviews-due"],
            Self::ActionsSummary => &["open", "due-soon", "overdue"],
            Self::ControlsLibrary => &["by-type", "test-outcomes", "policy-coverage"],
            Self::ComplianceHealth => &[
                "compliant-pct",
                "gaps",
                "overdue-assessments",
                "pending-certifications",
            ],
            Self::RiskAcceptances => &["urgent", "review-buckets", "pipeline"],
            Self::ConsumerDuty => &["rag-summary", "reviews-due"],
            Self::Insights => &["failing-controls", "policy-gaps", "key-controls"],
            Self::Reports => &["recent", "scheduled"],
            Self::UserManagement => &["users", "role-grants"],
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key_str())
    }
}

/// One registered section: key, kind, title, and element registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    /// Stable key.
    pub key: SectionKey,
    /// The render kind.
    pub kind: SectionKind,
    /// Display title.
    pub title: String,
    /// Registered element ids, in registry order.
    pub elements: Vec<ElementId>,
}

/// The section registry for one deployment.
///
/// Ordered; registry order is the system-default section order and the
/// append order for schema drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRegistry {
    sections: Vec<SectionDef>,
}

impl SectionRegistry {
    /// Build a registry from an explicit section list.
    pub fn new(sections: Vec<SectionDef>) -> Self {
        Self { sections }
    }

    /// The standard registry: every [`SectionKind`], in standard order.
    pub fn standard() -> Self {
        let sections = SectionKind::all()
            .iter()
            .map(|kind| SectionDef {
                key: kind.key(),
                kind: *kind,
                title: kind.title().to_string(),
                elements: kind
                    .element_ids()
                    .iter()
                    .map(|e| ElementId::new(*e))
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    /// The registered sections, in registry order.
    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    /// Registry keys, in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &SectionKey> {
        self.sections.iter().map(|s| &s.key)
    }

    /// Whether `key` is currently registered.
    pub fn contains(&self, key: &SectionKey) -> bool {
        self.sections.iter().any(|s| &s.key == key)
    }

    /// Look up a section definition by key.
    pub fn get(&self, key: &SectionKey) -> Option<&SectionDef> {
        self.sections.iter().find(|s| &s.key == key)
    }

    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ─── Role defaults ───────────────────────────────────────────────────

/// Sections the CCRO/administrator default order surfaces first: the
/// oversight widgets before the personal ones.
const ADMINISTRATOR_ORDER_FRONT: &[SectionKind] = &[
    SectionKind::Welcome,
    SectionKind::ActionRequired,
    SectionKind::Insights,
    SectionKind::ComplianceHealth,
    SectionKind::RiskSummary,
    SectionKind::RiskAcceptances,
];

/// The default section order for a role that has never saved a layout.
///
/// Administrator roles lead with the oversight widgets; every other
/// role gets registry order. Either way the result covers every
/// registry key exactly once.
pub fn default_section_order(role: Role, registry: &SectionRegistry) -> Vec<SectionKey> {
    let mut order: Vec<SectionKey> = Vec::with_capacity(registry.len());
    if role.is_administrator() {
        for kind in ADMINISTRATOR_ORDER_FRONT {
            let key = kind.key();
            if registry.contains(&key) {
                order.push(key);
            }
        }
    }
    for key in registry.keys() {
        if !order.contains(key) {
            order.push(key.clone());
        }
    }
    order
}

/// Sections hidden by default for a role with no saved hidden set.
///
/// Non-administrator roles do not see the administrator-only widgets on
/// first visit. An explicitly saved hidden set (even an empty one)
/// always takes precedence over this default.
pub fn default_hidden_sections(role: Role) -> BTreeSet<SectionKey> {
    if role.is_administrator() {
        BTreeSet::new()
    } else {
        [SectionKind::UserManagement, SectionKind::Reports]
            .iter()
            .map(|k| k.key())
            .collect()
    }
}

/// The system-default grid geometry, in registry order.
///
/// The first section spans the full row; the rest tile two-up. Saved
/// grids override per key; this only supplies geometry for keys the
/// saved grid does not mention.
pub fn default_grid(registry: &SectionRegistry) -> Vec<GridItem> {
    let mut grid = Vec::with_capacity(registry.len());
    for (i, section) in registry.sections().iter().enumerate() {
        let item = if i == 0 {
            GridItem {
                key: section.key.clone(),
                x: 0,
                y: 0,
                width: 12,
                height: 2,
            }
        } else {
            let slot = i - 1;
            GridItem {
                key: section.key.clone(),
                x: (slot as u32 % 2) * 6,
                y: 2 + (slot as u32 / 2) * 4,
                width: 6,
                height: 4,
            }
        };
        grid.push(item);
    }
    grid
}
