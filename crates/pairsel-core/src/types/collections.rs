//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec for round tie sets (almost always a single winner).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
