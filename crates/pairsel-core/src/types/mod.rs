//! Data structures and string interning for pairsel.
//! FxHashMap, SmallVec, lasso-based interning, Spur-based ID types.

pub mod collections;
pub mod identifiers;
pub mod interning;
pub mod records;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{FileId, MethodId, ProjectId};
pub use interning::{FrozenIdents, IdentInterner};
pub use records::PairRecord;
