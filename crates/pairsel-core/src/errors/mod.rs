//! Error handling for pairsel.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod output_error;
pub mod run_error;
pub mod selection_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::PairselErrorCode;
pub use output_error::OutputError;
pub use run_error::RunError;
pub use selection_error::SelectionError;
pub use storage_error::StorageError;
