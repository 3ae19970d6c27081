//! Top-level run errors.

use super::error_code::PairselErrorCode;
use super::{ConfigError, OutputError, SelectionError, StorageError};

/// Errors that can end a run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Data source error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl RunError {
    /// Process exit code for this error: 1 for data source failures,
    /// 2 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Storage(_) => 1,
            _ => 2,
        }
    }
}

impl PairselErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Selection(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
        }
    }
}
