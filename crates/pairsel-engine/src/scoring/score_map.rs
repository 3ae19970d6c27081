//! Symmetric similarity lookup over every loaded pair.

use std::sync::Arc;

use pairsel_core::types::{FrozenIdents, FxHashMap};

use super::pair_key::PairKey;
use crate::loader::{Candidate, MethodRef};

/// Combined similarity for every loaded pair, keyed by [`PairKey`].
///
/// Built once from all loaded candidates (same-project ones included) and
/// read-only afterwards. When two records share a key the later one wins.
pub struct ScoreMap {
    scores: FxHashMap<PairKey, f64>,
    idents: Arc<FrozenIdents>,
}

impl ScoreMap {
    pub fn build<'a, I>(candidates: I, idents: Arc<FrozenIdents>) -> Self
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        let iter = candidates.into_iter();
        let mut scores = FxHashMap::with_capacity_and_hasher(iter.size_hint().0, Default::default());
        for candidate in iter {
            let key = PairKey::canonical(candidate.first, candidate.second, &idents);
            scores.insert(key, candidate.combined_sim());
        }
        Self { scores, idents }
    }

    /// Similarity of two refs in either order.
    ///
    /// 1.0 for identical refs, the stored value for a known pair, and 0.0
    /// for pairs never loaded.
    #[inline]
    pub fn similarity(&self, a: MethodRef, b: MethodRef) -> f64 {
        if a == b {
            return 1.0;
        }
        let key = PairKey::canonical(a, b, &self.idents);
        self.scores.get(&key).copied().unwrap_or(0.0)
    }

    pub fn idents(&self) -> &FrozenIdents {
        &self.idents
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl std::fmt::Debug for ScoreMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreMap")
            .field("keys", &self.scores.len())
            .finish()
    }
}
