//! Event payloads emitted by the selection engine.

use std::fmt;

/// Phases of one selection run, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPhase {
    Init,
    Selecting,
    RandomFill,
    Done,
}

impl fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Selecting => "selecting",
            Self::RandomFill => "random_fill",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct PhaseChangedEvent {
    pub phase: SelectionPhase,
    pub selected: usize,
    pub target: usize,
}

#[derive(Debug, Clone)]
pub struct ItemSelectedEvent {
    pub phase: SelectionPhase,
    /// Zero-based sequence number of the new item.
    pub sequence: usize,
    pub target: usize,
    /// Candidates tied at the winning score (1 outside SELECTING).
    pub tie_count: usize,
}

impl ItemSelectedEvent {
    /// Percentage of the target reached once this item is counted.
    pub fn percent_complete(&self) -> f64 {
        if self.target == 0 {
            100.0
        } else {
            (self.sequence + 1) as f64 * 100.0 / self.target as f64
        }
    }
}
