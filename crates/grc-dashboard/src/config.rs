//! # Persisted Layout Configuration
//!
//! The whole-record layout preference saved per user. Saves replace the
//! entire record; there is no field-level patching, so every field here
//! reflects exactly what the last save wrote.
//!
//! The `Option` wrappers are load-bearing. `hidden_sections: None` means
//! the user never saved a hidden set and role defaults apply;
//! `Some(vec![])` means the user explicitly chose to show everything.
//! Collapsing the two would silently re-hide sections the user unhid.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use grc_core::ElementId;

use crate::registry::SectionKey;

/// Grid geometry for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    /// The section this geometry belongs to.
    pub key: SectionKey,
    /// Column offset.
    pub x: u32,
    /// Row offset.
    pub y: u32,
    /// Width in grid columns.
    pub width: u32,
    /// Height in grid rows.
    pub height: u32,
}

/// A user's saved dashboard layout.
///
/// Created on first explicit save (by the user or by an administrator
/// acting on their behalf); absent until then. Mutated wholesale on
/// each save. Never auto-deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Saved section order, or `None` if never reordered.
    pub section_order: Option<Vec<SectionKey>>,
    /// Saved hidden set. `None` = never saved (role defaults apply);
    /// `Some` = honoured verbatim, including an empty set.
    pub hidden_sections: Option<Vec<SectionKey>>,
    /// Saved grid geometry, or `None` for the system default.
    pub layout_grid: Option<Vec<GridItem>>,
    /// Saved per-section element order. Sections absent from the map
    /// use registry order.
    #[serde(default)]
    pub element_order: BTreeMap<SectionKey, Vec<ElementId>>,
    /// Hidden elements as `"section:element"` composite keys.
    #[serde(default)]
    pub hidden_elements: BTreeSet<String>,
    /// Sections an administrator has forced visible for this user.
    /// Administrator-only semantics: ignored on save for other roles.
    #[serde(default)]
    pub pinned_sections: BTreeSet<SectionKey>,
}

impl LayoutConfig {
    /// Compose the composite key used by `hidden_elements`.
    pub fn element_key(section: &SectionKey, element: &ElementId) -> String {
        format!("{section}:{element}")
    }

    /// Whether an element is hidden in this configuration.
    pub fn is_element_hidden(&self, section: &SectionKey, element: &ElementId) -> bool {
        self.hidden_elements
            .contains(&Self::element_key(section, element))
    }
}
