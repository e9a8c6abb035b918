//! Type-safe identifier wrappers around allocator-issued UIDs.
//!
//! Every entity in a project has a strongly-typed ID to prevent accidental
//! mixing of identifiers at compile time. The inner value is the raw `u64`
//! issued by the UID allocator (or by the chapter collaborator for chapter
//! IDs); the wrapper exists to keep the two ID spaces apart.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a raw `u64` UID with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// Wrap a raw UID value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Return the inner `u64` value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a story event on the board.
    EventId
}

define_id! {
    /// Unique identifier for a chapter in the chapter registry.
    ChapterId
}
