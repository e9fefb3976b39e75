//! # grc-dashboard — Layout Resolution Engine
//!
//! Turns a user's saved layout preferences, their role's defaults, the
//! current section registry, and any administrator pin constraints into
//! one deterministic rendering plan.
//!
//! ## The resolution problem
//!
//! A saved layout and the section registry evolve independently: the
//! registry gains sections after a user saved their layout, and saved
//! layouts keep keys the registry has since dropped. The resolver
//! reconciles the two on every request — unknown saved keys are ignored,
//! newly-registered keys are appended — so schema drift is never an
//! error (the forward/backward compatibility invariant).
//!
//! ## Modules
//!
//! - [`registry`] — the static section registry: open [`registry::SectionKey`]
//!   strings paired with the closed [`registry::SectionKind`] enum, plus
//!   role-specific default orders, hidden sets, and the default grid.
//! - [`config`] — the persisted [`config::LayoutConfig`]. `Option` fields
//!   preserve the null-vs-empty distinction: a never-saved hidden set
//!   falls back to role defaults, an explicitly-saved empty one means
//!   "show everything".
//! - [`resolve`] — the pure resolver. Each tier of the defaulting chain
//!   (saved → role default → system default) is a named function.
//! - [`store`] — the persistence boundary: whole-record get/put,
//!   last-writer-wins, with an in-memory reference implementation.
//! - [`edit`] — edit sessions: seed, destructive copy-from, and save
//!   with administrator-only pin semantics.

pub mod config;
pub mod edit;
pub mod registry;
pub mod resolve;
pub mod store;

pub use config::{GridItem, LayoutConfig};
pub use edit::{effective_layout, EditSession, LayoutError};
pub use registry::{SectionDef, SectionKey, SectionKind, SectionRegistry};
pub use resolve::{resolve, ResolvedLayout};
pub use store::{LayoutStore, MemoryLayoutStore, StoreError};
