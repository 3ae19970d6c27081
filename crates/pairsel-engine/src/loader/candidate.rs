//! Candidate pairs and their identity.

use std::hash::{Hash, Hasher};

use lasso::Key;
use pairsel_core::types::{FileId, MethodId, ProjectId};

/// One side of a pair: a method within a file. Projects are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub file: FileId,
    pub method: MethodId,
}

impl MethodRef {
    pub fn new(file: FileId, method: MethodId) -> Self {
        Self { file, method }
    }
}

/// What makes two candidates "the same": both method refs, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairIdentity {
    pub first: MethodRef,
    pub second: MethodRef,
}

/// Unordered pair of projects. `(a, b)` and `(b, a)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectPair {
    lo: ProjectId,
    hi: ProjectId,
}

impl ProjectPair {
    pub fn new(a: ProjectId, b: ProjectId) -> Self {
        if a.inner().into_usize() <= b.inner().into_usize() {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn projects(&self) -> (ProjectId, ProjectId) {
        (self.lo, self.hi)
    }
}

/// `weight·base + (1 − weight)·(1 − token)`: high for pairs that are
/// semantically close but lexically different.
#[inline]
pub fn combined_similarity(base_sim: f64, token_sim: f64, token_weight: f64) -> f64 {
    token_weight * base_sim + (1.0 - token_weight) * (1.0 - token_sim)
}

/// A selectable pair of methods from two projects.
///
/// Equality and hashing use only the two method refs; the projects are
/// metadata. Two candidates that differ only in their project pairing are
/// the same candidate.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub project1: ProjectId,
    pub first: MethodRef,
    pub project2: ProjectId,
    pub second: MethodRef,
    pub base_sim: f64,
    pub token_sim: f64,
    combined_sim: f64,
}

impl Candidate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project1: ProjectId,
        first: MethodRef,
        project2: ProjectId,
        second: MethodRef,
        base_sim: f64,
        token_sim: f64,
        token_weight: f64,
    ) -> Self {
        Self {
            project1,
            first,
            project2,
            second,
            base_sim,
            token_sim,
            combined_sim: combined_similarity(base_sim, token_sim, token_weight),
        }
    }

    #[inline]
    pub fn combined_sim(&self) -> f64 {
        self.combined_sim
    }

    #[inline]
    pub fn identity(&self) -> PairIdentity {
        PairIdentity {
            first: self.first,
            second: self.second,
        }
    }

    #[inline]
    pub fn project_pair(&self) -> ProjectPair {
        ProjectPair::new(self.project1, self.project2)
    }

    pub fn is_cross_project(&self) -> bool {
        self.project1 != self.project2
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}
