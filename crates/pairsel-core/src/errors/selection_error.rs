//! Selection engine errors.

use super::error_code::{self, PairselErrorCode};

/// Errors that abort a selection run.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Requested {requested} items but only {available} distinct candidates exist")]
    TargetExceedsCandidates { requested: usize, available: usize },

    #[error("Worker {worker} failed during round {round}: {message}")]
    WorkerFault {
        worker: usize,
        round: u64,
        message: String,
    },

    #[error("Failed to spawn worker pool: {message}")]
    PoolSpawn { message: String },

    #[error("No unselected candidate left in round {round}")]
    Exhausted { round: u64 },
}

impl PairselErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WorkerFault { .. } | Self::PoolSpawn { .. } => error_code::WORKER_FAULT,
            _ => error_code::SELECTION_ERROR,
        }
    }
}
