//! Diverse subset selection over candidate method pairs.
//!
//! Pipeline: [`loader`] turns raw pair records into an immutable
//! [`loader::Dataset`], [`scoring`] answers pairwise similarity and MMR
//! questions against it, [`selection`] runs the greedy MMR loop on a worker
//! pool, and [`output`] joins the result with stored identifiers and writes
//! CSV. [`run`] wires the stages together.

pub mod loader;
pub mod output;
pub mod run;
pub mod scoring;
pub mod selection;

pub use loader::{Candidate, Dataset, DatasetBuilder, LoadParams, PairFilter};
pub use run::{run_selection, RunSummary};
pub use scoring::ScoreMap;
pub use selection::{Selection, SelectionEngine, SelectionParams};
