//! Score map and redundancy tests.

mod common;

use pairsel_core::types::PairRecord;
use pairsel_engine::loader::{Candidate, MethodRef};
use pairsel_engine::scoring::{mmr_score, redundancy, squash};
use pairsel_engine::selection::SelectedSet;
use proptest::prelude::*;

use common::{dataset, triangle};

fn method_ref(ds: &pairsel_engine::Dataset, file: &str, method: &str) -> MethodRef {
    let idents = ds.idents();
    MethodRef::new(
        idents.get(file).unwrap().into(),
        idents.get(method).unwrap().into(),
    )
}

#[test]
fn similarity_identity_symmetry_and_absence() {
    let mut records = triangle();
    records.push(PairRecord::new("p4", "f4", "m4", "p5", "f5", "m5", 0.4, 0.4));
    let ds = dataset(&records);
    let scores = ds.scores();

    let a = method_ref(&ds, "f1", "m1");
    let b = method_ref(&ds, "f2", "m2");
    let d = method_ref(&ds, "f4", "m4");

    assert_eq!(scores.similarity(a, a), 1.0);
    assert_eq!(scores.similarity(a, b), scores.similarity(b, a));
    assert!((scores.similarity(a, b) - 0.875).abs() < 1e-12);
    assert_eq!(scores.similarity(a, d), 0.0);
    assert_eq!(scores.similarity(d, a), 0.0);
}

#[test]
fn later_record_wins_on_key_collision() {
    let records = vec![
        PairRecord::new("p1", "f1", "m1", "p2", "f2", "m2", 0.5, 0.5),
        PairRecord::new("p2", "f2", "m2", "p1", "f1", "m1", 0.9, 0.5),
    ];
    let ds = dataset(&records);
    let a = method_ref(&ds, "f1", "m1");
    let b = method_ref(&ds, "f2", "m2");

    assert_eq!(ds.scores().len(), 1);
    let expected = 0.75 * 0.9 + 0.25 * 0.5;
    assert!((ds.scores().similarity(a, b) - expected).abs() < 1e-12);
}

#[test]
fn redundancy_is_zero_against_empty_selection() {
    let ds = dataset(&triangle());
    let candidate = ds.candidates()[0];
    let empty = SelectedSet::new();
    assert_eq!(redundancy(&candidate, &empty, ds.scores()), 0.0);
    assert!((mmr_score(&candidate, &empty, ds.scores(), 0.6) - 0.6 * 0.875).abs() < 1e-12);
}

#[test]
fn redundancy_matches_hand_computed_signal() {
    let ds = dataset(&triangle());
    let (first, second) = (ds.candidates()[0], ds.candidates()[1]);
    let mut selected = SelectedSet::new();
    selected.insert(first);

    // Four lookups: 1.0 (shared f1#m1) + 0.0625 + 0.875 + 0.775, no shared
    // project pair, shared first file.
    let signal = 1.0 + 0.0625 + 0.875 + 0.775 + 0.0 + 1.0;
    assert!((redundancy(&second, &selected, ds.scores()) - squash(signal)).abs() < 1e-12);
}

#[test]
fn shared_project_pair_strictly_increases_redundancy() {
    let mut records = triangle();
    // Makes p4/p5 known to the interner.
    records.push(PairRecord::new("p4", "f4", "m4", "p5", "f5", "m5", 0.4, 0.4));
    let ds = dataset(&records);
    let seed = ds.candidates()[0];
    let mut selected = SelectedSet::new();
    selected.insert(seed);

    let probe = ds.candidates()[1];
    let with_projects = |p1, p2| {
        Candidate::new(p1, probe.first, p2, probe.second, probe.base_sim, probe.token_sim, 0.75)
    };
    let shared = with_projects(seed.project2, seed.project1);
    let unshared = with_projects(
        ds.idents().get("p4").unwrap().into(),
        ds.idents().get("p5").unwrap().into(),
    );

    let with = redundancy(&shared, &selected, ds.scores());
    let without = redundancy(&unshared, &selected, ds.scores());
    assert!(with > without, "{with} should exceed {without}");
}

proptest! {
    #[test]
    fn similarity_is_symmetric(
        rows in prop::collection::vec((0usize..6, 0usize..6, 0.02f64..1.0, 0.0f64..1.0), 1..40)
    ) {
        let records: Vec<PairRecord> = rows
            .iter()
            .map(|&(a, b, sim, tok)| {
                PairRecord::new("p1", format!("f{a}"), format!("m{a}"), "p2", format!("f{b}"), format!("m{b}"), sim, tok)
            })
            .collect();
        let ds = dataset(&records);

        let refs: Vec<MethodRef> = ds
            .candidates()
            .iter()
            .flat_map(|c| [c.first, c.second])
            .collect();
        for &x in &refs {
            prop_assert_eq!(ds.scores().similarity(x, x), 1.0);
            for &y in &refs {
                prop_assert_eq!(ds.scores().similarity(x, y), ds.scores().similarity(y, x));
            }
        }
    }

    #[test]
    fn squash_stays_in_unit_interval(v in 0.0f64..50.0) {
        let s = squash(v);
        prop_assert!((0.0..=1.0).contains(&s));
    }
}
