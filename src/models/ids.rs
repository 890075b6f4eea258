//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of trailing hex digits shown in the short display form
const SHORT_LEN: usize = 8;

/// Macro to generate ID newtype wrappers
///
/// `$generate` is the `Uuid` constructor used for fresh IDs.
macro_rules! define_id {
    ($name:ident, $display_prefix:literal, $generate:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new ID
            pub fn new() -> Self {
                Self(Uuid::$generate())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from its full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Short display form without the prefix (last hex digits)
            pub fn short(&self) -> String {
                let simple = self.0.simple().to_string();
                simple[simple.len() - SHORT_LEN..].to_string()
            }

            /// Check whether user input refers to this ID
            ///
            /// Accepts the full UUID, or the short form with or without prefix.
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                if let Ok(uuid) = Uuid::parse_str(input) {
                    return uuid == self.0;
                }
                let short = input.strip_prefix($display_prefix).unwrap_or(input);
                short.len() == SHORT_LEN && short.eq_ignore_ascii_case(&self.short())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s.trim())
            }
        }
    };
}

// Expense IDs are time-ordered (UUIDv7): millisecond clock plus random bits.
define_id!(ExpenseId, "exp-", now_v7);
define_id!(UserId, "usr-", new_v4);
