//! Shared fixtures for engine tests.
#![allow(dead_code)]

use std::cell::RefCell;

use pairsel_core::events::{ItemSelectedEvent, PhaseChangedEvent, SelectionObserver, SelectionPhase};
use pairsel_core::types::PairRecord;
use pairsel_engine::loader::{Dataset, LoadParams, PairFilter};

pub fn load_params() -> LoadParams {
    LoadParams {
        similarity_threshold: 0.01,
        token_weight: 0.75,
    }
}

pub fn dataset(records: &[PairRecord]) -> Dataset {
    Dataset::from_records(records, PairFilter::allow_all(), load_params())
}

/// The three-record example: two strong pairs sharing `f1#m1` and a weak
/// pair joining their other sides.
pub fn triangle() -> Vec<PairRecord> {
    vec![
        PairRecord::new("p1", "f1", "m1", "p2", "f2", "m2", 0.9, 0.2),
        PairRecord::new("p1", "f1", "m1", "p3", "f3", "m3", 0.8, 0.3),
        PairRecord::new("p2", "f2", "m2", "p3", "f3", "m3", 0.05, 0.9),
    ]
}

/// `n` cross-project pairs with strictly decreasing base similarity and a
/// constant token similarity, so combined order follows list order.
/// Projects and files repeat with small periods to exercise the frequency
/// terms, and every fifth pair shares its first method with the previous
/// pair's second method.
pub fn graded(n: usize) -> Vec<PairRecord> {
    (0..n)
        .map(|i| {
            let sim = 0.95 - i as f64 * (0.9 / n as f64);
            let first_method = if i % 5 == 4 {
                format!("m{}b", i - 1)
            } else {
                format!("m{i}a")
            };
            let first_file = if i % 5 == 4 {
                format!("src/F{}.java", (i - 1) % 4 + 4)
            } else {
                format!("src/F{}.java", i % 4)
            };
            PairRecord::new(
                format!("p{}", i % 3),
                first_file,
                first_method,
                format!("q{}", i % 2),
                format!("src/F{}.java", i % 4 + 4),
                format!("m{i}b"),
                sim,
                0.4,
            )
        })
        .collect()
}

/// `n` cross-project pairs that are indistinguishable to the scorer: same
/// scores, distinct projects, files and methods.
pub fn uniform(n: usize) -> Vec<PairRecord> {
    (0..n)
        .map(|i| {
            PairRecord::new(
                format!("a{i}"),
                format!("fa{i}"),
                format!("ma{i}"),
                format!("b{i}"),
                format!("fb{i}"),
                format!("mb{i}"),
                0.5,
                0.5,
            )
        })
        .collect()
}

/// Records every event it sees.
#[derive(Default)]
pub struct Recorder {
    pub phases: RefCell<Vec<SelectionPhase>>,
    pub items: RefCell<Vec<ItemSelectedEvent>>,
}

impl SelectionObserver for Recorder {
    fn on_phase_changed(&self, event: &PhaseChangedEvent) {
        self.phases.borrow_mut().push(event.phase);
    }

    fn on_item_selected(&self, event: &ItemSelectedEvent) {
        self.items.borrow_mut().push(event.clone());
    }
}
