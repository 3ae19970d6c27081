//! Selection lifecycle events and the observer trait.

pub mod handler;
pub mod types;

pub use handler::{NoopObserver, SelectionObserver};
pub use types::{ItemSelectedEvent, PhaseChangedEvent, SelectionPhase};
