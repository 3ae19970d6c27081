//! End-to-end run: load, select, join identifiers, write.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use pairsel_core::config::PairselConfig;
use pairsel_core::errors::RunError;
use pairsel_core::events::SelectionObserver;
use pairsel_core::traits::{IdentResolver, PairSource};

use crate::loader::{Dataset, LoadParams, LoadStats, PairFilter};
use crate::output::{build_records, write_csv};
use crate::selection::{SelectionEngine, SelectionParams};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub load: LoadStats,
    pub selected: usize,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

/// Select `target` pairs from `source` and write them to `output_path`.
///
/// Nothing is written unless every stage succeeds.
pub fn run_selection<S, R>(
    config: &PairselConfig,
    source: &S,
    resolver: &R,
    target: usize,
    output_path: &Path,
    observer: &dyn SelectionObserver,
) -> Result<RunSummary, RunError>
where
    S: PairSource + ?Sized,
    R: IdentResolver + ?Sized,
{
    let started = Instant::now();

    let filter = PairFilter::from_config(&config.filter)?;
    let dataset = Dataset::load(source, filter, LoadParams::from_config(&config.selection))?;

    let params = SelectionParams::from_config(&config.selection);
    tracing::info!(
        target,
        threads = params.threads,
        lambda = params.lambda,
        random_fraction = params.random_fraction,
        "starting selection"
    );
    let mut engine = SelectionEngine::new(params);
    let selections = engine.select(&dataset, target, observer)?;

    let write_started = Instant::now();
    let records = build_records(&selections, dataset.idents(), resolver)?;
    write_csv(output_path, &records)?;
    tracing::info!(
        rows = records.len(),
        path = %output_path.display(),
        elapsed_ms = write_started.elapsed().as_millis() as u64,
        "wrote output"
    );

    Ok(RunSummary {
        load: dataset.stats(),
        selected: selections.len(),
        output_path: output_path.to_path_buf(),
        elapsed: started.elapsed(),
    })
}
