//! Pair and identifier query tests.

use pairsel_core::errors::StorageError;
use pairsel_core::traits::{IdentResolver, PairSource};
use pairsel_core::types::PairRecord;
use pairsel_storage::schema::{create_schema, insert_method_doc, insert_pair};
use pairsel_storage::SimilarityDb;
use rusqlite::Connection;

fn fixture_db() -> SimilarityDb {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    for record in [
        PairRecord::new("p1", "f1", "m1", "p2", "f2", "m2", 0.30, 0.2),
        PairRecord::new("p1", "f1", "m1", "p3", "f3", "m3", 0.90, 0.3),
        PairRecord::new("p2", "f2", "m2", "p3", "f3", "m3", 0.01, 0.9),
        PairRecord::new("p2", "f2", "m2", "p2", "f4", "m4", 0.55, 0.5),
    ] {
        insert_pair(&conn, &record).unwrap();
    }
    insert_method_doc(&conn, "f1", "m1").unwrap();
    insert_method_doc(&conn, "f2", "m2").unwrap();
    SimilarityDb::from_connection(conn, "sim_cs")
}

#[test]
fn count_applies_strict_threshold() {
    let db = fixture_db();
    assert_eq!(db.count_pairs(0.01).unwrap(), 3);
    assert_eq!(db.count_pairs(0.0).unwrap(), 4);
    assert_eq!(db.count_pairs(0.9).unwrap(), 0);
}

#[test]
fn visit_orders_by_descending_similarity() {
    let db = fixture_db();
    let mut sims = Vec::new();
    let mut first = None;
    let visited = db
        .visit_pairs(0.01, &mut |r| {
            if first.is_none() {
                first = Some(r.clone());
            }
            sims.push(r.sim);
        })
        .unwrap();

    assert_eq!(visited, 3);
    assert_eq!(sims, vec![0.90, 0.55, 0.30]);
    let first = first.unwrap();
    assert_eq!(first.project2, "p3");
    assert_eq!(first.method2, "m3");
    assert_eq!(first.sim_tok, 0.3);
}

#[test]
fn unknown_similarity_column_is_a_sqlite_error() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    let db = SimilarityDb::from_connection(conn, "sim_missing");
    let err = db.count_pairs(0.01).unwrap_err();
    assert!(matches!(err, StorageError::SqliteError { .. }));
}

#[test]
fn injected_column_name_is_rejected() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    let db = SimilarityDb::from_connection(conn, "sim_cs FROM methodsim; --");
    let err = db.visit_pairs(0.01, &mut |_| {}).unwrap_err();
    assert!(matches!(err, StorageError::InvalidRecord { .. }));
}

#[test]
fn ident_lookup_requires_exact_match() {
    let db = fixture_db();
    assert_eq!(db.resolve_ident("f1", "m1").unwrap(), Some(1));
    assert_eq!(db.resolve_ident("f2", "m2").unwrap(), Some(2));
    assert_eq!(db.resolve_ident("f1", "m2").unwrap(), None);
    assert_eq!(db.resolve_ident("F1", "m1").unwrap(), None);
}

#[test]
fn missing_tables_surface_as_errors() {
    let db = SimilarityDb::from_connection(Connection::open_in_memory().unwrap(), "sim_cs");
    assert!(db.count_pairs(0.01).is_err());
    assert!(db.resolve_ident("f", "m").is_err());
}
