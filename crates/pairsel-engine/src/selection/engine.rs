//! Phase driver: INIT, SELECTING, RANDOM_FILL, DONE.

use std::sync::Arc;
use std::time::Instant;

use pairsel_core::errors::SelectionError;
use pairsel_core::events::{
    ItemSelectedEvent, PhaseChangedEvent, SelectionObserver, SelectionPhase,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::params::SelectionParams;
use super::pool::WorkerPool;
use super::scan::MmrScanner;
use super::state::SelectedSet;
use crate::loader::{Candidate, Dataset};

/// One chosen candidate and its zero-based position in the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub sequence: usize,
    /// Position in the dataset's candidate list.
    pub index: usize,
    pub candidate: Candidate,
}

/// Runs greedy MMR selection over a [`Dataset`].
///
/// The engine owns the RNG; successive runs on the same engine continue
/// the same random stream.
pub struct SelectionEngine {
    params: SelectionParams,
    rng: StdRng,
}

impl SelectionEngine {
    pub fn new(params: SelectionParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { params, rng }
    }

    pub fn params(&self) -> &SelectionParams {
        &self.params
    }

    /// Select `target` distinct candidates, in pick order.
    pub fn select(
        &mut self,
        dataset: &Dataset,
        target: usize,
        observer: &dyn SelectionObserver,
    ) -> Result<Vec<Selection>, SelectionError> {
        let available = dataset.distinct_candidates();
        if target > available {
            return Err(SelectionError::TargetExceedsCandidates {
                requested: target,
                available,
            });
        }

        let mut run = Run {
            candidates: dataset.candidates(),
            selected: Arc::new(SelectedSet::with_capacity(target)),
            output: Vec::with_capacity(target),
            target,
            observer,
        };
        if target == 0 {
            run.enter(SelectionPhase::Done);
            return Ok(run.output);
        }

        let started = Instant::now();
        let mmr_target = self.params.mmr_target(target);

        if mmr_target > 0 {
            run.enter(SelectionPhase::Init);
            let seed = self.pick_seed(run.candidates);
            run.push(seed, SelectionPhase::Init, 1);
        }

        if run.len() < mmr_target {
            run.enter(SelectionPhase::Selecting);
            self.select_mmr(&mut run, dataset, mmr_target)?;
        }

        if run.len() < target {
            run.enter(SelectionPhase::RandomFill);
            self.random_fill(&mut run);
        }

        run.enter(SelectionPhase::Done);
        tracing::info!(
            selected = run.len(),
            mmr = mmr_target.min(run.len()),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "selected items"
        );
        Ok(run.output)
    }

    /// Uniform pick among the leading candidates whose combined similarity
    /// is at least that of the first candidate.
    fn pick_seed(&mut self, candidates: &[Candidate]) -> usize {
        let floor = candidates[0].combined_sim();
        let prefix = candidates
            .iter()
            .take_while(|c| c.combined_sim() >= floor)
            .count();
        self.rng.random_range(0..prefix)
    }

    fn select_mmr(
        &mut self,
        run: &mut Run<'_>,
        dataset: &Dataset,
        mmr_target: usize,
    ) -> Result<(), SelectionError> {
        let scanner = MmrScanner::new(
            Arc::clone(dataset.candidates()),
            Arc::clone(dataset.scores()),
            self.params.lambda,
        );
        let mut pool = WorkerPool::spawn(self.params.threads, scanner)?;

        while run.len() < mmr_target {
            let best = pool.run_round(&run.selected)?;
            if best.is_empty() {
                return Err(SelectionError::Exhausted {
                    round: pool.rounds(),
                });
            }

            let mut ties = best.indices;
            // Partition order differs with the worker count; the draw must not.
            ties.sort_unstable();
            let pick = ties[self.rng.random_range(0..ties.len())];
            tracing::trace!(
                round = pool.rounds(),
                score = best.score,
                ties = ties.len(),
                pick,
                "round winner"
            );
            run.push(pick, SelectionPhase::Selecting, ties.len());
        }

        pool.shutdown();
        Ok(())
    }

    fn random_fill(&mut self, run: &mut Run<'_>) {
        let pool_size = run.candidates.len();
        let mut draws = 0u64;
        while run.len() < run.target {
            draws += 1;
            let index = self.rng.random_range(0..pool_size);
            if !run.selected.contains(&run.candidates[index]) {
                run.push(index, SelectionPhase::RandomFill, 1);
            }
        }
        tracing::debug!(draws, "random fill complete");
    }
}

/// Mutable state of one `select` call.
struct Run<'a> {
    candidates: &'a Arc<[Candidate]>,
    selected: Arc<SelectedSet>,
    output: Vec<Selection>,
    target: usize,
    observer: &'a dyn SelectionObserver,
}

impl Run<'_> {
    fn len(&self) -> usize {
        self.output.len()
    }

    fn enter(&self, phase: SelectionPhase) {
        tracing::debug!(%phase, selected = self.len(), target = self.target, "phase");
        self.observer.on_phase_changed(&PhaseChangedEvent {
            phase,
            selected: self.len(),
            target: self.target,
        });
    }

    fn push(&mut self, index: usize, phase: SelectionPhase, tie_count: usize) {
        let candidate = self.candidates[index];
        // Workers have released their snapshots, so this does not clone.
        Arc::make_mut(&mut self.selected).insert(candidate);

        let sequence = self.output.len();
        self.output.push(Selection {
            sequence,
            index,
            candidate,
        });
        self.observer.on_item_selected(&ItemSelectedEvent {
            phase,
            sequence,
            target: self.target,
            tie_count,
        });
    }
}
