//! Newtype IDs for type-safe identifiers.
//!
//! Catalog ids are small integers assigned in the seed data, so the newtype
//! wraps a `u32` rather than a generated string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID from its integer value.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the integer value.
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
