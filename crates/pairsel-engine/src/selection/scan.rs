//! Per-partition MMR scan.

use std::sync::Arc;

use pairsel_core::types::collections::SmallVec4;

use super::state::SelectedSet;
use crate::loader::Candidate;
use crate::scoring::{mmr_score, ScoreMap};

/// Best score seen in one partition and every candidate index reaching it.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionBest {
    pub score: f64,
    pub indices: SmallVec4<usize>,
}

impl PartitionBest {
    pub fn empty() -> Self {
        Self {
            score: f64::NEG_INFINITY,
            indices: SmallVec4::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Record `index` if it beats or exactly ties the current best.
    #[inline]
    pub fn offer(&mut self, index: usize, score: f64) {
        if score > self.score {
            self.score = score;
            self.indices.clear();
            self.indices.push(index);
        } else if score == self.score {
            self.indices.push(index);
        }
    }

    /// Fold another partition's result in: higher score wins, exact ties
    /// concatenate.
    pub fn merge(&mut self, other: PartitionBest) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() || other.score > self.score {
            *self = other;
        } else if other.score == self.score {
            self.indices.extend(other.indices);
        }
    }
}

impl Default for PartitionBest {
    fn default() -> Self {
        Self::empty()
    }
}

/// Scans one strided partition of the candidate list against a snapshot of
/// the selected set. Implementations must be callable from any worker.
pub trait RoundScanner: Send + Sync + 'static {
    /// Scan indices `worker, worker + stride, …`.
    fn scan(&self, selected: &SelectedSet, worker: usize, stride: usize) -> PartitionBest;
}

/// The production scanner: MMR over the shared candidate list.
#[derive(Debug, Clone)]
pub struct MmrScanner {
    candidates: Arc<[Candidate]>,
    scores: Arc<ScoreMap>,
    lambda: f64,
}

impl MmrScanner {
    pub fn new(candidates: Arc<[Candidate]>, scores: Arc<ScoreMap>, lambda: f64) -> Self {
        Self {
            candidates,
            scores,
            lambda,
        }
    }
}

impl RoundScanner for MmrScanner {
    fn scan(&self, selected: &SelectedSet, worker: usize, stride: usize) -> PartitionBest {
        scan_partition(&self.candidates, &self.scores, selected, self.lambda, worker, stride)
    }
}

/// Score every unselected candidate in the partition, in list order.
///
/// Stops at the first candidate whose combined similarity is below the
/// best MMR found so far in this partition. The list is ordered by base
/// similarity, so this can stop before a higher-scoring candidate.
pub fn scan_partition(
    candidates: &[Candidate],
    scores: &ScoreMap,
    selected: &SelectedSet,
    lambda: f64,
    worker: usize,
    stride: usize,
) -> PartitionBest {
    debug_assert!(stride > 0, "stride must be positive");
    let mut best = PartitionBest::empty();
    for index in (worker..candidates.len()).step_by(stride.max(1)) {
        let candidate = &candidates[index];
        if candidate.combined_sim() < best.score {
            break;
        }
        if selected.contains(candidate) {
            continue;
        }
        best.offer(index, mmr_score(candidate, selected, scores, lambda));
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{Dataset, LoadParams, PairFilter};
    use pairsel_core::types::PairRecord;
    use smallvec::smallvec;

    /// Base order a, b, c; combined 0.375, 0.1875, 0.4.
    fn out_of_order() -> Dataset {
        let records = vec![
            PairRecord::new("p1", "a", "m", "p2", "a2", "m", 0.5, 1.0),
            PairRecord::new("p1", "b", "m", "p2", "b2", "m", 0.25, 1.0),
            PairRecord::new("p1", "c", "m", "p2", "c2", "m", 0.2, 0.0),
        ];
        let params = LoadParams {
            similarity_threshold: 0.01,
            token_weight: 0.75,
        };
        Dataset::from_records(&records, PairFilter::allow_all(), params)
    }

    #[test]
    fn offer_keeps_exact_ties() {
        let mut best = PartitionBest::empty();
        best.offer(4, 0.3);
        best.offer(7, 0.3);
        best.offer(9, 0.1);
        assert_eq!(best.indices.as_slice(), &[4, 7]);

        best.offer(11, 0.5);
        assert_eq!(best.score, 0.5);
        assert_eq!(best.indices.as_slice(), &[11]);
    }

    #[test]
    fn merge_prefers_higher_and_joins_ties() {
        let mut merged = PartitionBest::empty();
        merged.merge(PartitionBest::empty());
        assert!(merged.is_empty());

        merged.merge(PartitionBest { score: 0.2, indices: smallvec![1] });
        merged.merge(PartitionBest { score: 0.4, indices: smallvec![6] });
        merged.merge(PartitionBest { score: 0.4, indices: smallvec![3, 8] });
        merged.merge(PartitionBest { score: 0.1, indices: smallvec![0] });

        assert_eq!(merged.score, 0.4);
        assert_eq!(merged.indices.as_slice(), &[6, 3, 8]);
    }

    #[test]
    fn scan_stops_at_first_combined_below_best() {
        let dataset = out_of_order();
        let candidates = dataset.candidates();
        let scores = dataset.scores();
        let selected = SelectedSet::default();

        let global = (0..candidates.len())
            .max_by(|&x, &y| {
                let sx = mmr_score(&candidates[x], &selected, scores, 0.6);
                let sy = mmr_score(&candidates[y], &selected, scores, 0.6);
                sx.total_cmp(&sy)
            })
            .unwrap();
        assert_eq!(global, 2);

        // Index 1 falls below the best so far and ends the scan before 2.
        let best = scan_partition(candidates, scores, &selected, 0.6, 0, 1);
        assert_eq!(best.indices.as_slice(), &[0]);
        assert!((best.score - 0.225).abs() < 1e-12);
    }

    #[test]
    fn early_exit_is_per_partition() {
        let dataset = out_of_order();
        let selected = SelectedSet::default();

        let even = scan_partition(dataset.candidates(), dataset.scores(), &selected, 0.6, 0, 2);
        assert_eq!(even.indices.as_slice(), &[2]);
        assert!((even.score - 0.24).abs() < 1e-12);

        let odd = scan_partition(dataset.candidates(), dataset.scores(), &selected, 0.6, 1, 2);
        assert_eq!(odd.indices.as_slice(), &[1]);
    }
}
