//! # Edit Sessions
//!
//! The edit buffer for customizing a dashboard — the viewer's own, or
//! another user's when an administrator is curating on their behalf.
//! The buffer is a full [`LayoutConfig`] that only reaches the store on
//! an explicit save; fetch failures while seeding fall back to defaults
//! silently, while save failures are surfaced and leave the buffer
//! untouched so the user can retry without re-entering work.

use tracing::warn;

use grc_core::{Role, UserId};

use crate::config::LayoutConfig;
use crate::registry::SectionRegistry;
use crate::resolve::{resolve, ResolvedLayout};
use crate::store::{LayoutStore, StoreError};

/// Errors surfaced to the caller by layout operations.
///
/// Fetch failures during view-mode resolution and edit seeding are
/// *not* represented here — those recover locally to defaults. Only
/// operations whose failure the user must see produce these.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A copy-from source layout could not be fetched.
    #[error("failed to load layout for {user}: {source}")]
    Fetch {
        /// The user whose layout was requested.
        user: UserId,
        /// The underlying store failure.
        source: StoreError,
    },

    /// A save could not be persisted.
    #[error("failed to save layout for {user}: {source}")]
    Save {
        /// The save target.
        user: UserId,
        /// The underlying store failure.
        source: StoreError,
    },
}

/// The effective (view-mode) layout for a user.
///
/// This is the read path a request handler calls per render. A store
/// failure here is non-fatal: the viewer gets the role-default layout
/// and the failure is logged, never surfaced.
pub fn effective_layout(
    store: &impl LayoutStore,
    user: &UserId,
    role: Role,
    registry: &SectionRegistry,
) -> ResolvedLayout {
    let saved = match store.get_layout(user) {
        Ok(saved) => saved,
        Err(err) => {
            warn!(user = %user, error = %err, "layout fetch failed, falling back to defaults");
            None
        }
    };
    resolve(saved.as_ref(), role, registry)
}

/// An in-progress layout edit for one target user.
///
/// Authorization to edit a user other than the viewer is the caller's
/// concern; the session only enforces the save-time pin rule.
#[derive(Debug, Clone)]
pub struct EditSession {
    target: UserId,
    buffer: LayoutConfig,
}

impl EditSession {
    /// Begin an edit session seeded from the target user's stored
    /// layout.
    ///
    /// If the target has never saved a layout — or the fetch fails —
    /// the buffer starts empty, which resolves to the role defaults.
    /// The fetch failure is logged and otherwise swallowed: losing a
    /// seed is recoverable, failing the whole edit flow is not better.
    pub fn begin(store: &impl LayoutStore, target: UserId) -> Self {
        let buffer = match store.get_layout(&target) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(err) => {
                warn!(user = %target, error = %err, "edit seed fetch failed, starting from defaults");
                LayoutConfig::default()
            }
        };
        Self { target, buffer }
    }

    /// The user this session will save to.
    pub fn target(&self) -> &UserId {
        &self.target
    }

    /// Read access to the edit buffer.
    pub fn buffer(&self) -> &LayoutConfig {
        &self.buffer
    }

    /// Mutable access to the edit buffer.
    pub fn buffer_mut(&mut self) -> &mut LayoutConfig {
        &mut self.buffer
    }

    /// Preview the buffer as it would resolve for `role`.
    pub fn preview(&self, role: Role, registry: &SectionRegistry) -> ResolvedLayout {
        resolve(Some(&self.buffer), role, registry)
    }

    /// Discard the buffer and reseed it from another user's stored
    /// layout.
    ///
    /// Destructive and total: grid, hidden sets, pins, and element
    /// orders are all replaced; there is no partial merge. The source
    /// user's stored layout is read-only here, and nothing is written
    /// to the target until an explicit [`save`](Self::save). A source
    /// with no stored layout resets the buffer to defaults. On fetch
    /// failure the buffer is left untouched and the error surfaced —
    /// the caller confirmed a destructive operation that did not
    /// happen.
    pub fn copy_from(
        &mut self,
        store: &impl LayoutStore,
        source: &UserId,
    ) -> Result<(), LayoutError> {
        let fetched = store.get_layout(source).map_err(|source_err| {
            LayoutError::Fetch {
                user: source.clone(),
                source: source_err,
            }
        })?;
        self.buffer = fetched.unwrap_or_default();
        Ok(())
    }

    /// Persist the buffer as the target user's layout.
    ///
    /// Always writes the complete record. Only administrator roles may
    /// set pinned sections; for any other role the pins are stripped
    /// from the written record even if present in the buffer. A store
    /// failure is surfaced and the buffer is left exactly as it was.
    pub fn save(
        &self,
        store: &impl LayoutStore,
        role: Role,
    ) -> Result<LayoutConfig, LayoutError> {
        let mut layout = self.buffer.clone();
        if !role.is_administrator() {
            layout.pinned_sections.clear();
        }
        store
            .put_layout(&self.target, layout)
            .map_err(|source| LayoutError::Save {
                user: self.target.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionKind;
    use crate::store::MemoryLayoutStore;
    use std::collections::BTreeSet;

    /// A store that fails every operation, for exercising the failure
    /// paths.
    struct BrokenStore;

    impl LayoutStore for BrokenStore {
        fn get_layout(&self, _user: &UserId) -> Result<Option<LayoutConfig>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        fn put_layout(
            &self,
            _user: &UserId,
            _layout: LayoutConfig,
        ) -> Result<LayoutConfig, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn saved_layout() -> LayoutConfig {
        LayoutConfig {
            hidden_sections: Some(vec![SectionKind::Insights.key()]),
            pinned_sections: [SectionKind::ComplianceHealth.key()].into_iter().collect(),
            ..LayoutConfig::default()
        }
    }

    // ── effective_layout ─────────────────────────────────────────────

    #[test]
    fn test_effective_layout_uses_stored_config() {
        let store = MemoryLayoutStore::new();
        let user = UserId::new("u-1");
        store.put_layout(&user, saved_layout()).unwrap();
        let registry = SectionRegistry::standard();
        let resolved = effective_layout(&store, &user, Role::Standard, &registry);
        assert!(resolved.hidden.contains(&SectionKind::Insights.key()));
    }

    #[test]
    fn test_effective_layout_fetch_failure_falls_back_to_defaults() {
        let registry = SectionRegistry::standard();
        let resolved =
            effective_layout(&BrokenStore, &UserId::new("u-1"), Role::Standard, &registry);
        // Role defaults, not an error.
        assert!(resolved.hidden.contains(&SectionKind::UserManagement.key()));
        assert_eq!(resolved.order.len(), registry.len());
    }

    // ── EditSession seeding ──────────────────────────────────────────

    #[test]
    fn test_begin_seeds_from_stored_layout() {
        let store = MemoryLayoutStore::new();
        let user = UserId::new("u-1");
        store.put_layout(&user, saved_layout()).unwrap();
        let session = EditSession::begin(&store, user);
        assert_eq!(session.buffer(), &saved_layout());
    }

    #[test]
    fn test_begin_with_no_stored_layout_starts_empty() {
        let store = MemoryLayoutStore::new();
        let session = EditSession::begin(&store, UserId::new("u-1"));
        assert_eq!(session.buffer(), &LayoutConfig::default());
    }

    #[test]
    fn test_begin_fetch_failure_starts_empty_not_error() {
        let session = EditSession::begin(&BrokenStore, UserId::new("u-1"));
        assert_eq!(session.buffer(), &LayoutConfig::default());
    }

    // ── copy_from ────────────────────────────────────────────────────

    #[test]
    fn test_copy_from_replaces_buffer_wholesale() {
        let store = MemoryLayoutStore::new();
        let source = UserId::new("source");
        store.put_layout(&source, saved_layout()).unwrap();

        let mut session = EditSession::begin(&store, UserId::new("target"));
        session.buffer_mut().section_order = Some(vec![SectionKind::Reports.key()]);
        session.copy_from(&store, &source).unwrap();

        // In-progress edits discarded; pins copied too.
        assert_eq!(session.buffer(), &saved_layout());
        assert!(session.buffer().section_order.is_none());
    }

    #[test]
    fn test_copy_from_does_not_write_anything() {
        let store = MemoryLayoutStore::new();
        let source = UserId::new("source");
        let target = UserId::new("target");
        store.put_layout(&source, saved_layout()).unwrap();

        let mut session = EditSession::begin(&store, target.clone());
        session.copy_from(&store, &source).unwrap();

        // Source untouched, target still unwritten.
        assert_eq!(store.get_layout(&source).unwrap(), Some(saved_layout()));
        assert_eq!(store.get_layout(&target).unwrap(), None);
    }

    #[test]
    fn test_copy_from_failure_leaves_buffer_untouched() {
        let store = MemoryLayoutStore::new();
        let target = UserId::new("target");
        store.put_layout(&target, saved_layout()).unwrap();

        let mut session = EditSession::begin(&store, target);
        let before = session.buffer().clone();
        let result = session.copy_from(&BrokenStore, &UserId::new("source"));
        assert!(matches!(result, Err(LayoutError::Fetch { .. })));
        assert_eq!(session.buffer(), &before);
    }

    // ── save ─────────────────────────────────────────────────────────

    #[test]
    fn test_administrator_save_keeps_pins() {
        let store = MemoryLayoutStore::new();
        let user = UserId::new("u-1");
        let mut session = EditSession::begin(&store, user.clone());
        session.buffer_mut().pinned_sections =
            [SectionKind::RiskSummary.key()].into_iter().collect();

        session.save(&store, Role::Ccro).unwrap();
        let stored = store.get_layout(&user).unwrap().unwrap();
        assert!(stored
            .pinned_sections
            .contains(&SectionKind::RiskSummary.key()));
    }

    #[test]
    fn test_non_administrator_save_strips_pins() {
        let store = MemoryLayoutStore::new();
        let user = UserId::new("u-1");
        let mut session = EditSession::begin(&store, user.clone());
        session.buffer_mut().pinned_sections =
            [SectionKind::RiskSummary.key()].into_iter().collect();
        session.buffer_mut().hidden_sections = Some(vec![SectionKind::Reports.key()]);

        session.save(&store, Role::RiskOwner).unwrap();
        let stored = store.get_layout(&user).unwrap().unwrap();
        assert_eq!(stored.pinned_sections, BTreeSet::new());
        // Everything else is written as edited.
        assert_eq!(
            stored.hidden_sections,
            Some(vec![SectionKind::Reports.key()])
        );
        // The buffer itself is not mutated by the strip.
        assert!(!session.buffer().pinned_sections.is_empty());
    }

    #[test]
    fn test_save_failure_surfaces_and_mutates_nothing() {
        let store = MemoryLayoutStore::new();
        let user = UserId::new("u-1");
        let mut session = EditSession::begin(&store, user);
        session.buffer_mut().hidden_sections = Some(Vec::new());
        let before = session.buffer().clone();

        let result = session.save(&BrokenStore, Role::Ccro);
        assert!(matches!(result, Err(LayoutError::Save { .. })));
        assert_eq!(session.buffer(), &before);
    }

    #[test]
    fn test_concurrent_saves_last_writer_wins() {
        let store = MemoryLayoutStore::new();
        let user = UserId::new("u-1");

        let mut first = EditSession::begin(&store, user.clone());
        first.buffer_mut().hidden_sections = Some(vec![SectionKind::Reports.key()]);
        let mut second = EditSession::begin(&store, user.clone());
        second.buffer_mut().hidden_sections = Some(vec![SectionKind::Insights.key()]);

        first.save(&store, Role::Standard).unwrap();
        second.save(&store, Role::Standard).unwrap();

        let stored = store.get_layout(&user).unwrap().unwrap();
        assert_eq!(
            stored.hidden_sections,
            Some(vec![SectionKind::Insights.key()])
        );
    }
}
