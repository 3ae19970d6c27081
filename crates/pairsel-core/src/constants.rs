//! Shared constants for the pairsel selection engine.

/// pairsel version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Records at or below this base similarity are never loaded.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.01;

/// Relevance weight in the MMR objective.
pub const DEFAULT_LAMBDA: f64 = 0.6;

/// Interpolation weight between base similarity and token dissimilarity.
pub const DEFAULT_TOKEN_WEIGHT: f64 = 0.75;

/// Fraction of the target filled by uniform random draws.
pub const DEFAULT_RANDOM_FRACTION: f64 = 0.0;

/// Default number of worker threads (0 = available parallelism).
pub const DEFAULT_THREADS: usize = 0;

/// Default SQLite database path, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "docs.db";

/// Default column holding the base similarity in `methodsim`.
pub const DEFAULT_SIMILARITY_COLUMN: &str = "sim_cs";

/// Projects excluded from loading unless configured otherwise.
pub const DEFAULT_EXCLUDED_PROJECTS: &[&str] = &["jEdit"];

/// Path rules excluded from loading unless configured otherwise.
/// Example trees, Android-specific trees, and numbered test fixtures.
pub const DEFAULT_EXCLUDED_PATH_RULES: &[&str] = &["/examples?/", "/android/", "/test[0-9]+/"];

/// Project config file name looked up in the config directory.
pub const PROJECT_CONFIG_FILE: &str = "pairsel.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "PAIRSEL_LOG";

/// CSV header of the selection output.
pub const OUTPUT_HEADER: [&str; 11] = [
    "pairid", "ident1", "project1", "file1", "method1", "ident2", "project2", "file2", "method2",
    "sim", "sim_tok",
];
