//! pairsel: pick a diverse subset of cross-project method pairs.

#![forbid(unsafe_code)]

mod progress;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use pairsel_core::config::{CliOverrides, PairselConfig};
use pairsel_core::errors::{PairselErrorCode, RunError};
use pairsel_core::events::{NoopObserver, SelectionObserver};
use pairsel_engine::run_selection;
use pairsel_storage::SimilarityDb;

use crate::progress::StderrProgress;

#[derive(Parser, Debug)]
#[command(name = "pairsel")]
#[command(
    version,
    about = "Select a diverse, non-redundant subset of cross-project method pairs",
    after_help = "Log levels are read from PAIRSEL_LOG, e.g. PAIRSEL_LOG=pairsel_engine=debug"
)]
struct Cli {
    /// Number of pairs to select
    target_count: usize,

    /// CSV file to write
    output_path: PathBuf,

    /// SQLite database holding `methodsim` and `internal_filtered_methoddocs`
    #[arg(long)]
    db: Option<String>,

    /// Worker threads for MMR rounds (0 = available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    /// Seed for reproducible selections
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of the target filled by uniform random draws
    #[arg(long)]
    random_fraction: Option<f64>,

    /// Directory searched for pairsel.toml
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            db_path: self.db.clone(),
            threads: self.threads,
            seed: self.seed,
            random_fraction: self.random_fraction,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    pairsel_core::tracing::init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.error_code(), error = %err, "run failed");
            eprintln!("[E] {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let config = PairselConfig::load(&cli.config_dir, Some(&cli.overrides()))?;
    let db = SimilarityDb::open(
        Path::new(config.storage.effective_db_path()),
        config.storage.effective_similarity_column(),
    )?;

    let progress = StderrProgress::new();
    let observer: &dyn SelectionObserver = if std::io::stderr().is_terminal() {
        &progress
    } else {
        &NoopObserver
    };

    let summary = run_selection(
        &config,
        &db,
        &db,
        cli.target_count,
        &cli.output_path,
        observer,
    )?;
    progress.finish();

    tracing::info!(
        selected = summary.selected,
        loaded = summary.load.loaded,
        candidates = summary.load.cross_project,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        path = %summary.output_path.display(),
        "done"
    );
    Ok(())
}
