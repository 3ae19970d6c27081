//! Configuration system for pairsel.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod filter_config;
pub mod pairsel_config;
pub mod selection_config;
pub mod storage_config;

pub use filter_config::FilterConfig;
pub use pairsel_config::{CliOverrides, PairselConfig};
pub use selection_config::SelectionConfig;
pub use storage_config::StorageConfig;
