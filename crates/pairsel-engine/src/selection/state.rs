//! The growing selected set and its frequency counters.

use pairsel_core::types::{FileId, FxHashMap, FxHashSet};

use crate::loader::{Candidate, PairIdentity, ProjectPair};

/// Candidates picked so far, in pick order, with the counters redundancy
/// scoring needs.
///
/// Only the driver mutates it, between rounds. Workers read a shared
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct SelectedSet {
    picks: Vec<Candidate>,
    members: FxHashSet<PairIdentity>,
    project_pairs: FxHashMap<ProjectPair, u32>,
    first_files: FxHashMap<FileId, u32>,
    second_files: FxHashMap<FileId, u32>,
}

impl SelectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            picks: Vec::with_capacity(capacity),
            members: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    #[inline]
    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.members.contains(&candidate.identity())
    }

    /// Add `candidate`. Returns `false` if its identity is already present.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if !self.members.insert(candidate.identity()) {
            return false;
        }
        *self.project_pairs.entry(candidate.project_pair()).or_default() += 1;
        *self.first_files.entry(candidate.first.file).or_default() += 1;
        *self.second_files.entry(candidate.second.file).or_default() += 1;
        self.picks.push(candidate);
        true
    }

    /// Picks in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.picks.iter()
    }

    /// Fraction of picks sharing `candidate`'s unordered project pair.
    pub fn project_pair_frequency(&self, candidate: &Candidate) -> f64 {
        self.fraction(self.project_pairs.get(&candidate.project_pair()))
    }

    /// Fraction of picks with the same first file plus fraction with the
    /// same second file. Ranges over `[0, 2]`.
    pub fn file_frequency(&self, candidate: &Candidate) -> f64 {
        self.fraction(self.first_files.get(&candidate.first.file))
            + self.fraction(self.second_files.get(&candidate.second.file))
    }

    #[inline]
    fn fraction(&self, count: Option<&u32>) -> f64 {
        match count {
            Some(&n) if !self.picks.is_empty() => f64::from(n) / self.picks.len() as f64,
            _ => 0.0,
        }
    }
}
