//! Identifier join and CSV serialization of a finished selection.

pub mod writer;

pub use writer::{build_records, write_csv, OutputRecord};
