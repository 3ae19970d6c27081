//! Spur-based ID types for type-safe interned identifiers.
//!
//! Projects, files and methods share one interner, but each ID type wraps
//! the `lasso::Spur` separately so a `FileId` cannot stand in for a
//! `MethodId`.

use lasso::Spur;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Spur);

        impl $name {
            /// Create a new ID from a `Spur`.
            pub fn new(spur: Spur) -> Self {
                Self(spur)
            }

            /// Get the inner `Spur`.
            pub fn inner(self) -> Spur {
                self.0
            }
        }

        impl From<Spur> for $name {
            fn from(spur: Spur) -> Self {
                Self(spur)
            }
        }

        impl From<$name> for Spur {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Interned project name.
    ProjectId
);

define_id!(
    /// Interned source file path.
    FileId
);

define_id!(
    /// Interned method signature.
    MethodId
);
