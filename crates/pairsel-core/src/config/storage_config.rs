//! Data source configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_PATH, DEFAULT_SIMILARITY_COLUMN};

/// Where pair records and method identifiers are read from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database path. Default: `docs.db`.
    pub db_path: Option<String>,
    /// Column of `methodsim` used as base similarity. Default: `sim_cs`.
    pub similarity_column: Option<String>,
}

impl StorageConfig {
    pub fn effective_db_path(&self) -> &str {
        self.db_path.as_deref().unwrap_or(DEFAULT_DB_PATH)
    }

    pub fn effective_similarity_column(&self) -> &str {
        self.similarity_column
            .as_deref()
            .unwrap_or(DEFAULT_SIMILARITY_COLUMN)
    }
}

/// True when `name` is a bare SQL identifier (`[A-Za-z_][A-Za-z0-9_]*`).
/// The similarity column is spliced into SQL text, so nothing else is allowed.
pub fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
