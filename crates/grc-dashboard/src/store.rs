//! # Layout Persistence Boundary
//!
//! The only two store operations this engine requires: fetch a user's
//! layout and replace it wholesale. Both are atomic, all-or-nothing;
//! concurrent saves for the same user are last-writer-wins at the
//! granularity of the whole record.
//!
//! [`MemoryLayoutStore`] is the reference implementation, used by tests
//! and suitable for single-process deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use grc_core::UserId;

use crate::config::LayoutConfig;

/// Errors surfaced by a layout store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("layout store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the layout payload.
    #[error("layout payload rejected: {0}")]
    Rejected(String),
}

/// The persistence boundary for per-user layouts.
///
/// Implementations must treat `put_layout` as a whole-record replace:
/// no field-level merging, no optimistic locking. The later of two
/// concurrent saves for the same user wins.
pub trait LayoutStore {
    /// Fetch the stored layout for a user. `None` means the user has
    /// never saved one.
    fn get_layout(&self, user: &UserId) -> Result<Option<LayoutConfig>, StoreError>;

    /// Replace the stored layout for a user, returning what was stored.
    fn put_layout(&self, user: &UserId, layout: LayoutConfig)
        -> Result<LayoutConfig, StoreError>;
}

/// In-memory layout store.
#[derive(Debug, Default)]
pub struct MemoryLayoutStore {
    layouts: RwLock<HashMap<UserId, LayoutConfig>>,
}

impl MemoryLayoutStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored layout.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no user has saved a layout yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<UserId, LayoutConfig>> {
        // A poisoned lock only means another thread panicked mid-read;
        // the map itself is still coherent.
        self.layouts.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn get_layout(&self, user: &UserId) -> Result<Option<LayoutConfig>, StoreError> {
        Ok(self.read().get(user).cloned())
    }

    fn put_layout(
        &self,
        user: &UserId,
        layout: LayoutConfig,
    ) -> Result<LayoutConfig, StoreError> {
        let mut layouts = self.layouts.write().unwrap_or_else(|e| e.into_inner());
        layouts.insert(user.clone(), layout.clone());
        Ok(layout)
    }
}
