//! # grc-model — Entity Records for the GRC Dashboard Engine
//!
//! Plain serde record types mirroring the shapes held by the external
//! entity stores. Cross-entity references are identifiers only — the
//! store does not enforce referential integrity, and neither do these
//! types. A `ControlId` held by a risk may point at a control that was
//! deleted a moment ago; aggregation code skips such links silently.
//!
//! Each mutable entity type (risk, action, control) embeds a `changes`
//! vector of [`ProposedChange`] records — in-flight edits awaiting
//! reviewer approval. Approval and rejection mutate the store, not
//! these types.
//!
//! Due-status and review-cycle semantics live in `grc_core::temporal`;
//! this crate only implements the `Trackable`/`Reviewable` traits so
//! the shared classifiers are the single notion of "overdue".

pub mod acceptance;
pub mod action;
pub mod change;
pub mod consumer_duty;
pub mod control;
pub mod policy;
pub mod regulation;
pub mod risk;

pub use acceptance::{AcceptanceStatus, RiskAcceptance};
pub use action::{Action, ActionStatus};
pub use change::{ChangeStatus, ProposedChange};
pub use consumer_duty::{ConsumerDutyMeasure, DutyOutcome};
pub use control::{Control, ControlTestResult, ControlType, RagStatus};
pub use policy::{Obligation, ObligationSection, Policy};
pub use regulation::{CertificationStatus, CertifiedPerson, ComplianceStatus, Regulation};
pub use risk::{Risk, RiskStatus};
