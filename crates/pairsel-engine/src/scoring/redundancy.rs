//! Redundancy against the selected set and the MMR objective.

use super::score_map::ScoreMap;
use crate::loader::Candidate;
use crate::selection::SelectedSet;

/// Maps `[0, ∞)` onto `[0, 1)`: `2 / (1 + e^-v) − 1`.
#[inline]
pub fn squash(v: f64) -> f64 {
    2.0 / (1.0 + (-v).exp()) - 1.0
}

/// Highest overlap between `candidate` and any already-selected item.
///
/// Overlap with one selected item sums the four cross similarities of
/// their method refs, how often the candidate's project pair was already
/// picked, and how often its files already appeared in the same position.
/// Zero for an empty selection.
pub fn redundancy(candidate: &Candidate, selected: &SelectedSet, scores: &ScoreMap) -> f64 {
    if selected.is_empty() {
        return 0.0;
    }
    let frequency =
        selected.project_pair_frequency(candidate) + selected.file_frequency(candidate);

    selected
        .iter()
        .map(|picked| {
            let overlap = scores.similarity(candidate.first, picked.first)
                + scores.similarity(candidate.second, picked.second)
                + scores.similarity(candidate.first, picked.second)
                + scores.similarity(candidate.second, picked.first);
            squash(overlap + frequency)
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

/// `λ·combined − (1 − λ)·redundancy`.
#[inline]
pub fn mmr_score(
    candidate: &Candidate,
    selected: &SelectedSet,
    scores: &ScoreMap,
    lambda: f64,
) -> f64 {
    lambda * candidate.combined_sim() - (1.0 - lambda) * redundancy(candidate, selected, scores)
}
