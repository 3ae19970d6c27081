//! SelectionObserver trait with no-op defaults.

use super::types::{ItemSelectedEvent, PhaseChangedEvent};

/// Receives selection progress.
///
/// All methods have no-op default implementations, so observers only
/// override what they care about. Events are emitted on the driver thread.
pub trait SelectionObserver {
    fn on_phase_changed(&self, _event: &PhaseChangedEvent) {}
    fn on_item_selected(&self, _event: &ItemSelectedEvent) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {}
