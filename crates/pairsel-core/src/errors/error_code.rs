//! PairselErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait PairselErrorCode {
    /// Returns the error code string (e.g., "DATA_SOURCE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged form: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DATA_SOURCE_ERROR: &str = "DATA_SOURCE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SELECTION_ERROR: &str = "SELECTION_ERROR";
pub const WORKER_FAULT: &str = "WORKER_FAULT";
pub const LOOKUP_ERROR: &str = "LOOKUP_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
