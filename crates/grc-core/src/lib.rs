//! # grc-core — Foundational Types for the GRC Dashboard Engine
//!
//! This crate is the leaf of the workspace DAG. It defines the primitives
//! that every other crate builds on: identifier newtypes, the viewer's
//! role and capability set, and the shared temporal classifiers.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `RiskId`, `ControlId`,
//!    `PolicyId`, `UserId` — all newtypes over store-minted strings. No
//!    bare strings for identifiers, so a `ControlId` can never be passed
//!    where a `PolicyId` is expected.
//!
//! 2. **One definition of "overdue".** Every aggregator that touches a
//!    date delegates to `temporal::is_overdue` / `is_due_soon` /
//!    `is_review_due`. There is exactly one notion of due-status across
//!    the whole dashboard.
//!
//! 3. **The clock is a parameter.** No function in this workspace reads
//!    a global clock; `now` is always supplied by the caller.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `grc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod identity;
pub mod role;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use identity::{
    AcceptanceId, ActionId, ChangeId, ControlId, ElementId, MeasureId, ObligationId, PolicyId,
    RegulationId, RiskId, UserId,
};
pub use role::{CapabilitySet, Role};
pub use temporal::{
    classify_due, days_until, is_due_soon, is_overdue, is_review_due, next_review, DueStatus,
    Reviewable, Trackable, DEFAULT_REVIEW_FREQUENCY_DAYS, DUE_SOON_HORIZON_DAYS,
    REVIEW_DUE_WINDOW_DAYS,
};
