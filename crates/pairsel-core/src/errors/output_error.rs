//! Output join and serialization errors.

use std::path::PathBuf;

use super::error_code::{self, PairselErrorCode};

/// Errors that can occur while joining identifiers and writing the CSV.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("No stored identifier for {file}#{method}")]
    MissingIdentifier { file: String, method: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

impl PairselErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingIdentifier { .. } => error_code::LOOKUP_ERROR,
            Self::WriteFailed { .. } => error_code::OUTPUT_ERROR,
        }
    }
}
