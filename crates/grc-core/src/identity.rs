//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the GRC dashboard
//! engine. These prevent accidental identifier confusion — you cannot
//! pass a `RiskId` where a `ControlId` is expected.
//!
//! Identifiers are minted by the external entity store, so the inner
//! representation is an opaque `String` rather than an engine-generated
//! UUID. The engine never inspects identifier contents; it only compares
//! and hashes them.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a store-minted identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Access the raw identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// Unique identifier for a dashboard user.
    UserId
}

string_id! {
    /// Unique identifier for a risk record.
    RiskId
}

string_id! {
    /// Unique identifier for an action (remediation task).
    ActionId
}

string_id! {
    /// Unique identifier for a control in the controls library.
    ControlId
}

string_id! {
    /// Unique identifier for a policy.
    PolicyId
}

string_id! {
    /// Unique identifier for a policy obligation.
    ObligationId
}

string_id! {
    /// Unique identifier for a regulation.
    RegulationId
}

string_id! {
    /// Unique identifier for a risk acceptance.
    AcceptanceId
}

string_id! {
    /// Unique identifier for a consumer-duty measure.
    MeasureId
}

string_id! {
    /// Unique identifier for a proposed change embedded in an entity.
    ChangeId
}

string_id! {
    /// Identifier for an element (sub-part) within a dashboard section.
    ElementId
}
