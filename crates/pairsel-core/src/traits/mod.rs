//! Seams between the engine and its external collaborators.

pub mod ident_resolver;
pub mod pair_source;

pub use ident_resolver::IdentResolver;
pub use pair_source::PairSource;
