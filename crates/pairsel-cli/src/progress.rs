//! Percentage progress on stderr.

use std::cell::Cell;
use std::io::Write;

use pairsel_core::events::{ItemSelectedEvent, PhaseChangedEvent, SelectionObserver, SelectionPhase};

/// Rewrites a single stderr line whenever the whole-percent value changes.
#[derive(Debug, Default)]
pub struct StderrProgress {
    last_percent: Cell<Option<u32>>,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminate the progress line if one was drawn.
    pub fn finish(&self) {
        if self.last_percent.get().is_some() {
            eprintln!();
        }
    }
}

impl SelectionObserver for StderrProgress {
    fn on_phase_changed(&self, event: &PhaseChangedEvent) {
        if event.phase == SelectionPhase::RandomFill {
            tracing::debug!(selected = event.selected, target = event.target, "random fill");
        }
    }

    fn on_item_selected(&self, event: &ItemSelectedEvent) {
        let percent = event.percent_complete().floor() as u32;
        if self.last_percent.get() == Some(percent) {
            return;
        }
        self.last_percent.set(Some(percent));

        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "\r{percent:3}% ({}/{})", event.sequence + 1, event.target);
        let _ = stderr.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_redraws_on_percent_change() {
        let progress = StderrProgress::new();
        let event = |sequence| ItemSelectedEvent {
            phase: SelectionPhase::Selecting,
            sequence,
            target: 400,
            tie_count: 1,
        };

        progress.on_item_selected(&event(0));
        assert_eq!(progress.last_percent.get(), Some(0));
        progress.on_item_selected(&event(2));
        assert_eq!(progress.last_percent.get(), Some(0));
        progress.on_item_selected(&event(3));
        assert_eq!(progress.last_percent.get(), Some(1));
    }
}
