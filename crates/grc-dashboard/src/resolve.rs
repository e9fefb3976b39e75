//! # Layout Resolver
//!
//! Pure resolution of a saved layout (possibly absent), a role, and the
//! current registry into one effective rendering plan. No I/O, no
//! clock, no ambient state — everything the resolver needs arrives as a
//! parameter.
//!
//! Each tier of the defaulting chain is a named function rather than an
//! implicit first-truthy-wins expression: saved preference, then role
//! default, then system default. Schema drift is absorbed here — saved
//! keys the registry no longer defines are dropped, registry keys the
//! saved layout never saw are appended in registry order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use grc_core::{ElementId, Role};

use crate::config::{GridItem, LayoutConfig};
use crate::registry::{
    default_grid, default_hidden_sections, default_section_order, SectionKey, SectionRegistry,
};

/// The effective layout for one viewer: the final rendering plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLayout {
    /// Section order; a permutation of the registry keys.
    pub order: Vec<SectionKey>,
    /// Sections hidden in view mode, after pin override.
    pub hidden: BTreeSet<SectionKey>,
    /// Grid geometry, one entry per registry key.
    pub grid: Vec<GridItem>,
    /// Element order per registry section.
    pub element_order: BTreeMap<SectionKey, Vec<ElementId>>,
    /// Hidden elements as `"section:element"` composite keys, verbatim
    /// from the saved layout. Pinning applies at section granularity
    /// only, so there is no pin override at this level.
    pub hidden_elements: BTreeSet<String>,
}

impl ResolvedLayout {
    /// The sections that actually render, in order.
    pub fn visible_order(&self) -> impl Iterator<Item = &SectionKey> {
        self.order.iter().filter(|k| !self.hidden.contains(*k))
    }
}

/// Resolve the effective layout for a viewer.
///
/// `saved` is the user's stored [`LayoutConfig`], or `None` if they
/// have never saved one. The result always covers every registry key
/// exactly once in `order` and `grid`, regardless of what the saved
/// layout contains.
pub fn resolve(
    saved: Option<&LayoutConfig>,
    role: Role,
    registry: &SectionRegistry,
) -> ResolvedLayout {
    let order = resolve_section_order(
        saved.and_then(|s| s.section_order.as_deref()),
        role,
        registry,
    );
    let pinned = saved.map(|s| &s.pinned_sections);
    let hidden = apply_pin_override(
        resolve_hidden_sections(saved.and_then(|s| s.hidden_sections.as_deref()), role),
        pinned,
    );
    let grid = resolve_grid(saved.and_then(|s| s.layout_grid.as_deref()), registry);
    let element_order = resolve_element_order(saved.map(|s| &s.element_order), registry);
    let hidden_elements = saved
        .map(|s| s.hidden_elements.clone())
        .unwrap_or_default();

    ResolvedLayout {
        order,
        hidden,
        grid,
        element_order,
        hidden_elements,
    }
}

/// Tier resolution for the section order.
///
/// Saved order wins where present; otherwise the role default. Unknown
/// saved keys are dropped, duplicates collapse to first occurrence, and
/// registry keys the base never mentions are appended in registry
/// order.
fn resolve_section_order(
    saved: Option<&[SectionKey]>,
    role: Role,
    registry: &SectionRegistry,
) -> Vec<SectionKey> {
    let mut order: Vec<SectionKey> = Vec::with_capacity(registry.len());
    if let Some(saved) = saved {
        for key in saved {
            if registry.contains(key) && !order.contains(key) {
                order.push(key.clone());
            }
        }
    } else {
        order = default_section_order(role, registry);
    }
    for key in registry.keys() {
        if !order.contains(key) {
            order.push(key.clone());
        }
    }
    order
}

/// Tier resolution for the hidden-section set.
///
/// A saved set is honoured verbatim — an explicitly saved empty set
/// means "show everything" and must not fall through to the role
/// default. Only a never-saved (`None`) set uses the role default.
fn resolve_hidden_sections(saved: Option<&[SectionKey]>, role: Role) -> BTreeSet<SectionKey> {
    match saved {
        Some(saved) => saved.iter().cloned().collect(),
        None => default_hidden_sections(role),
    }
}

/// Pinning always wins over hiding: subtract pinned keys from the
/// hidden set, whatever tier produced it.
fn apply_pin_override(
    mut hidden: BTreeSet<SectionKey>,
    pinned: Option<&BTreeSet<SectionKey>>,
) -> BTreeSet<SectionKey> {
    if let Some(pinned) = pinned {
        for key in pinned {
            hidden.remove(key);
        }
    }
    hidden
}

/// Tier resolution for grid geometry.
///
/// Saved geometry is kept per key; unknown keys are dropped, duplicate
/// keys collapse to first occurrence, and keys the saved grid never
/// mentions get their system-default geometry appended.
fn resolve_grid(saved: Option<&[GridItem]>, registry: &SectionRegistry) -> Vec<GridItem> {
    let defaults = default_grid(registry);
    let Some(saved) = saved else {
        return defaults;
    };

    let mut grid: Vec<GridItem> = Vec::with_capacity(registry.len());
    let mut seen: BTreeSet<&SectionKey> = BTreeSet::new();
    for item in saved {
        if registry.contains(&item.key) && seen.insert(&item.key) {
            grid.push(item.clone());
        }
    }
    for item in defaults {
        if !grid.iter().any(|g| g.key == item.key) {
            grid.push(item);
        }
    }
    grid
}

/// Per-section element order resolution (second level of nesting).
///
/// For each registry section: keep saved ids that are still registered,
/// drop unknown ids, then append newly-registered ids in registry
/// order. Sections with no saved order use registry order outright.
fn resolve_element_order(
    saved: Option<&BTreeMap<SectionKey, Vec<ElementId>>>,
    registry: &SectionRegistry,
) -> BTreeMap<SectionKey, Vec<ElementId>> {
    let mut resolved = BTreeMap::new();
    for section in registry.sections() {
        let mut order: Vec<ElementId> = Vec::with_capacity(section.elements.len());
        if let Some(saved_order) = saved.and_then(|m| m.get(&section.key)) {
            for id in saved_order {
                if section.elements.contains(id) && !order.contains(id) {
                    order.push(id.clone());
                }
            }
        }
        for id in &section.elements {
            if !order.contains(id) {
                order.push(id.clone());
            }
        }
        resolved.insert(section.key.clone(), order);
    }
    resolved
}
