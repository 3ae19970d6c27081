//! Top-level pairsel configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::storage_config::is_sql_identifier;
use super::{FilterConfig, SelectionConfig, StorageConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PAIRSEL_*`)
/// 3. Project config (`pairsel.toml` in the config directory)
/// 4. User config (`~/.pairsel/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PairselConfig {
    pub storage: StorageConfig,
    pub filter: FilterConfig,
    pub selection: SelectionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<String>,
    pub threads: Option<usize>,
    pub seed: Option<u64>,
    pub random_fraction: Option<f64>,
}

impl PairselConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { message, .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message,
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PairselConfig) -> Result<(), ConfigError> {
        let unit_fields = [
            ("selection.lambda", config.selection.lambda),
            ("selection.token_weight", config.selection.token_weight),
            ("selection.random_fraction", config.selection.random_fraction),
            (
                "selection.similarity_threshold",
                config.selection.similarity_threshold,
            ),
        ];
        for (field, value) in unit_fields {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if let Some(ref column) = config.storage.similarity_column {
            if !is_sql_identifier(column) {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.similarity_column".to_string(),
                    message: format!("{column:?} is not a plain column name"),
                });
            }
        }
        if let Some(ref db_path) = config.storage.db_path {
            if db_path.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.db_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.pairsel/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".pairsel").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PairselConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PairselConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut PairselConfig, other: &PairselConfig) {
        // Storage
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
        if other.storage.similarity_column.is_some() {
            base.storage.similarity_column = other.storage.similarity_column.clone();
        }

        // Filter
        if other.filter.excluded_projects.is_some() {
            base.filter.excluded_projects = other.filter.excluded_projects.clone();
        }
        if other.filter.excluded_path_rules.is_some() {
            base.filter.excluded_path_rules = other.filter.excluded_path_rules.clone();
        }

        // Selection
        if other.selection.lambda.is_some() {
            base.selection.lambda = other.selection.lambda;
        }
        if other.selection.token_weight.is_some() {
            base.selection.token_weight = other.selection.token_weight;
        }
        if other.selection.random_fraction.is_some() {
            base.selection.random_fraction = other.selection.random_fraction;
        }
        if other.selection.similarity_threshold.is_some() {
            base.selection.similarity_threshold = other.selection.similarity_threshold;
        }
        if other.selection.threads.is_some() {
            base.selection.threads = other.selection.threads;
        }
        if other.selection.seed.is_some() {
            base.selection.seed = other.selection.seed;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PAIRSEL_DB_PATH`, `PAIRSEL_THREADS`, etc.
    fn apply_env_overrides(config: &mut PairselConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("PAIRSEL_DB_PATH") {
            config.storage.db_path = Some(val);
        }
        if let Ok(val) = std::env::var("PAIRSEL_SIMILARITY_COLUMN") {
            config.storage.similarity_column = Some(val);
        }
        if let Some(v) = parse_env::<f64>("PAIRSEL_LAMBDA")? {
            config.selection.lambda = Some(v);
        }
        if let Some(v) = parse_env::<f64>("PAIRSEL_RANDOM_FRACTION")? {
            config.selection.random_fraction = Some(v);
        }
        if let Some(v) = parse_env::<usize>("PAIRSEL_THREADS")? {
            config.selection.threads = Some(v);
        }
        if let Some(v) = parse_env::<u64>("PAIRSEL_SEED")? {
            config.selection.seed = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PairselConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_path {
            config.storage.db_path = Some(v.clone());
        }
        if let Some(v) = cli.threads {
            config.selection.threads = Some(v);
        }
        if let Some(v) = cli.seed {
            config.selection.seed = Some(v);
        }
        if let Some(v) = cli.random_fraction {
            config.selection.random_fraction = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse an environment variable, rejecting values that do not parse.
fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
