//! Identifier types for quantification entities.
//!
//! Strongly-typed identifiers for failure modes, loss scenarios, affected
//! parties and mitigations. Using newtypes ensures type safety and prevents
//! accidental misuse of identifiers across entity kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier.
            #[inline]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw identifier value.
            #[inline]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

entity_id! {
    /// Unique identifier for a failure mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use quant_core::ids::FailureModeId;
    ///
    /// let id = FailureModeId::new(7);
    /// assert_eq!(id.value(), 7);
    /// ```
    FailureModeId
}

entity_id! {
    /// Unique identifier for a loss scenario.
    ScenarioId
}

entity_id! {
    /// Unique identifier for an affected party.
    PartyId
}

entity_id! {
    /// Unique identifier for a mitigation.
    MitigationId
}
