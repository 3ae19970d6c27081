//! Query modules for each upstream table.

pub mod idents;
pub mod pairs;
