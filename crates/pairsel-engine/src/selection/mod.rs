//! Greedy MMR selection over the candidate list.
//!
//! [`SelectionEngine`] drives the phases on the calling thread. Each
//! SELECTING round fans out to a [`WorkerPool`]; every worker scans a
//! strided partition of the list with a [`RoundScanner`] and the driver
//! merges the per-partition [`PartitionBest`] results before drawing.

pub mod engine;
pub mod params;
pub mod pool;
pub mod scan;
pub mod state;

pub use engine::{Selection, SelectionEngine};
pub use params::SelectionParams;
pub use pool::WorkerPool;
pub use scan::{scan_partition, MmrScanner, PartitionBest, RoundScanner};
pub use state::SelectedSet;
