//! Candidate loading: filtering, interning, score map construction and
//! the cross-project selection pool.

pub mod candidate;
pub mod dataset;
pub mod filter;

pub use candidate::{combined_similarity, Candidate, MethodRef, PairIdentity, ProjectPair};
pub use dataset::{Dataset, DatasetBuilder, LoadParams, LoadStats};
pub use filter::PairFilter;
