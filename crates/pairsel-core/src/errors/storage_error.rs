//! Data source errors.

use super::error_code::{self, PairselErrorCode};

/// Errors raised while reading pair records or identifiers from the store.
/// All of them are fatal for a run.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Cannot open database {path}: {message}")]
    OpenFailed { path: String, message: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Invalid record in {table}: {message}")]
    InvalidRecord { table: String, message: String },
}

impl PairselErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_SOURCE_ERROR
    }
}
