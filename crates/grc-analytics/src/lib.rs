//! # grc-analytics — Cross-Entity Analytics
//!
//! Derives every dashboard statistic from the raw entity collections.
//! All functions here share the same contract:
//!
//! - **Pure.** Inputs are slices plus a caller-supplied `now` (and a
//!   capability set where an analytic is gated); outputs are owned
//!   summary records. Nothing is mutated, nothing is cached — every
//!   statistic is recomputed per render pass.
//! - **Snapshot semantics.** Collections are treated as one consistent
//!   snapshot. A link pointing at an entity deleted mid-fetch is
//!   skipped silently, never a failure.
//! - **No misleading zeros.** Any ratio with an empty denominator
//!   returns `None` ("no data") rather than a fabricated 0% or 100%.
//! - **Deterministic ordering.** Ranked lists sort by the stated key
//!   descending via a stable sort, so ties keep original collection
//!   order.
//!
//! Date handling delegates to `grc_core::temporal` without exception,
//! so "overdue" means the same thing in every widget.

pub mod acceptance;
pub mod compliance;
pub mod consumer_duty;
pub mod controls;
pub mod insights;
pub mod pending;
pub mod risk_summary;

pub use acceptance::{acceptance_stats, AcceptanceRef, AcceptanceStats, ReviewBucketEntry};
pub use compliance::{compliance_health, ComplianceHealth};
pub use consumer_duty::{consumer_duty_summary, ConsumerDutySummary};
pub use controls::{controls_library_stats, ControlsLibraryStats};
pub use insights::{
    dashboard_insights, DashboardInsights, KeyControl, PolicyGap, RiskControlFailure, INSIGHT_CAP,
};
pub use pending::{collect_pending_changes, pending_change_count, EntityKind, PendingChange};
pub use risk_summary::{risk_summary, RiskSummary};
