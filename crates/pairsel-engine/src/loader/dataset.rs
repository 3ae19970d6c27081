//! Immutable inputs of one selection run.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use pairsel_core::config::SelectionConfig;
use pairsel_core::errors::StorageError;
use pairsel_core::traits::PairSource;
use pairsel_core::types::{FrozenIdents, FxHashSet, IdentInterner, PairRecord};

use super::candidate::{Candidate, MethodRef};
use super::filter::PairFilter;
use crate::scoring::ScoreMap;

/// Loader knobs that shape the candidate list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadParams {
    /// Records with `sim` at or below this value are skipped.
    pub similarity_threshold: f64,
    /// Weight of base similarity in the combined score.
    pub token_weight: f64,
}

impl LoadParams {
    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            similarity_threshold: config.effective_similarity_threshold(),
            token_weight: config.effective_token_weight(),
        }
    }
}

impl Default for LoadParams {
    fn default() -> Self {
        Self::from_config(&SelectionConfig::default())
    }
}

/// Counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Records handed to the builder.
    pub visited: usize,
    /// Dropped for `sim` at or below the threshold, or a non-finite score.
    pub below_threshold: usize,
    /// Dropped by the project/path filter.
    pub excluded: usize,
    /// Kept records; all of them feed the score map.
    pub loaded: usize,
    /// Kept records whose two sides come from different projects.
    pub cross_project: usize,
    /// Distinct candidate identities among the cross-project records.
    pub distinct_candidates: usize,
}

/// Accumulates records, then freezes into a [`Dataset`].
pub struct DatasetBuilder {
    interner: IdentInterner,
    filter: PairFilter,
    params: LoadParams,
    loaded: Vec<Candidate>,
    stats: LoadStats,
}

impl DatasetBuilder {
    pub fn new(filter: PairFilter, params: LoadParams) -> Self {
        Self {
            interner: IdentInterner::new(),
            filter,
            params,
            loaded: Vec::new(),
            stats: LoadStats::default(),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.loaded.reserve(additional);
    }

    /// Filter and intern one record.
    pub fn push(&mut self, record: PairRecord) {
        self.stats.visited += 1;
        let above_threshold = record.sim > self.params.similarity_threshold;
        if !above_threshold || !record.sim.is_finite() || !record.sim_tok.is_finite() {
            self.stats.below_threshold += 1;
            return;
        }
        if !self.filter.accepts(&record) {
            self.stats.excluded += 1;
            return;
        }

        let interner = &self.interner;
        let candidate = Candidate::new(
            interner.intern_project(&record.project1),
            MethodRef::new(
                interner.intern_file(&record.file1),
                interner.intern_method(&record.method1),
            ),
            interner.intern_project(&record.project2),
            MethodRef::new(
                interner.intern_file(&record.file2),
                interner.intern_method(&record.method2),
            ),
            record.sim,
            record.sim_tok,
            self.params.token_weight,
        );
        self.loaded.push(candidate);
    }

    /// Stream every record above the threshold from `source`.
    pub fn load_from<S: PairSource + ?Sized>(&mut self, source: &S) -> Result<usize, StorageError> {
        let expected = source.count_pairs(self.params.similarity_threshold)?;
        self.reserve(expected);
        source.visit_pairs(self.params.similarity_threshold, &mut |record| self.push(record))
    }

    pub fn build(self) -> Dataset {
        let Self {
            interner,
            loaded,
            mut stats,
            ..
        } = self;

        let idents = Arc::new(interner.freeze());

        let started = Instant::now();
        let scores = ScoreMap::build(&loaded, Arc::clone(&idents));
        tracing::info!(
            keys = scores.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built score map"
        );

        let mut candidates: Vec<Candidate> =
            loaded.iter().filter(|c| c.is_cross_project()).copied().collect();
        // Stable, so records with equal base similarity keep source order.
        candidates.sort_by(|a, b| b.base_sim.partial_cmp(&a.base_sim).unwrap_or(Ordering::Equal));

        let distinct: FxHashSet<_> = candidates.iter().map(Candidate::identity).collect();
        stats.loaded = loaded.len();
        stats.cross_project = candidates.len();
        stats.distinct_candidates = distinct.len();

        Dataset {
            idents,
            scores: Arc::new(scores),
            candidates: candidates.into(),
            stats,
        }
    }
}

/// Interned names, the score map and the cross-project candidate list,
/// all read-only for the rest of the run.
#[derive(Clone)]
pub struct Dataset {
    idents: Arc<FrozenIdents>,
    scores: Arc<ScoreMap>,
    candidates: Arc<[Candidate]>,
    stats: LoadStats,
}

impl Dataset {
    /// Load, filter and index everything `source` yields.
    pub fn load<S: PairSource + ?Sized>(
        source: &S,
        filter: PairFilter,
        params: LoadParams,
    ) -> Result<Self, StorageError> {
        let started = Instant::now();
        let mut builder = DatasetBuilder::new(filter, params);
        let visited = builder.load_from(source)?;
        tracing::info!(
            records = visited,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched dataset"
        );

        let dataset = builder.build();
        let stats = dataset.stats();
        tracing::info!(
            loaded = stats.loaded,
            excluded = stats.excluded,
            cross_project = stats.cross_project,
            distinct = stats.distinct_candidates,
            "prepared candidates"
        );
        Ok(dataset)
    }

    /// Build directly from in-memory records.
    pub fn from_records(records: &[PairRecord], filter: PairFilter, params: LoadParams) -> Self {
        let mut builder = DatasetBuilder::new(filter, params);
        builder.reserve(records.len());
        for record in records {
            builder.push(record.clone());
        }
        builder.build()
    }

    /// Cross-project candidates, descending by base similarity.
    pub fn candidates(&self) -> &Arc<[Candidate]> {
        &self.candidates
    }

    pub fn scores(&self) -> &Arc<ScoreMap> {
        &self.scores
    }

    pub fn idents(&self) -> &FrozenIdents {
        &self.idents
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn distinct_candidates(&self) -> usize {
        self.stats.distinct_candidates
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("candidates", &self.candidates.len())
            .field("scores", &self.scores)
            .field("stats", &self.stats)
            .finish()
    }
}
