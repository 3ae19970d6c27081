//! Pairwise similarity lookups and the MMR objective.

pub mod pair_key;
pub mod redundancy;
pub mod score_map;

pub use pair_key::PairKey;
pub use redundancy::{mmr_score, redundancy, squash};
pub use score_map::ScoreMap;
