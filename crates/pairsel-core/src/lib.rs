//! Core types, traits, errors, config, events, tracing, and constants
//! shared by every pairsel crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;
