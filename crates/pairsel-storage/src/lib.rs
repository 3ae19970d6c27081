//! SQLite-backed data source for pairsel.
//!
//! Reads candidate pair records from `methodsim` and resolves method
//! identifiers from `internal_filtered_methoddocs`. The store is never
//! written to during a run.

pub mod connection;
pub mod queries;
pub mod schema;

pub use connection::SimilarityDb;
