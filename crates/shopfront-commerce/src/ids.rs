//! Newtype entity IDs for type-safe identifiers.
//!
//! The commerce API identifies every entity with an integer. Newtypes keep
//! an option id from being passed where a value id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Macro to generate integer entity ID newtypes.
macro_rules! define_entity_id {
    ($name:ident, $kind:literal) => {
        #[doc = concat!("Integer entity identifier of a ", $kind, ".")]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw entity id.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// The raw entity id.
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Parse a decimal integer string, rejecting anything else.
            pub fn parse(raw: &str) -> Result<Self, CommerceError> {
                raw.parse::<i64>()
                    .map(Self)
                    .map_err(|_| CommerceError::InvalidIdentifier {
                        kind: $kind,
                        value: raw.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_entity_id!(ProductId, "product");
define_entity_id!(OptionId, "option");
define_entity_id!(ValueId, "option value");
define_entity_id!(PageId, "web page");
define_entity_id!(ReviewId, "review");
