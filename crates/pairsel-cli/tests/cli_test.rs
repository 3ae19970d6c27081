//! Binary-level tests: arguments, exit codes and output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pairsel_core::types::PairRecord;
use pairsel_storage::schema::{create_schema, insert_method_doc, insert_pair};
use rusqlite::Connection;

fn build_store(path: &Path) {
    let conn = Connection::open(path).unwrap();
    create_schema(&conn).unwrap();
    for record in [
        PairRecord::new("p1", "f1", "m1", "p2", "f2", "m2", 0.9, 0.2),
        PairRecord::new("p1", "f1", "m1", "p3", "f3", "m3", 0.8, 0.3),
        PairRecord::new("p2", "f2", "m2", "p3", "f3", "m3", 0.05, 0.9),
    ] {
        insert_pair(&conn, &record).unwrap();
    }
    for (file, method) in [("f1", "m1"), ("f2", "m2"), ("f3", "m3")] {
        insert_method_doc(&conn, file, method).unwrap();
    }
}

/// Run the binary inside `dir`, isolated from the caller's config and env.
fn pairsel(dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pairsel"));
    cmd.current_dir(dir).env("HOME", dir).env_remove("USERPROFILE");
    for key in [
        "PAIRSEL_DB_PATH",
        "PAIRSEL_SIMILARITY_COLUMN",
        "PAIRSEL_LAMBDA",
        "PAIRSEL_RANDOM_FRACTION",
        "PAIRSEL_THREADS",
        "PAIRSEL_SEED",
        "PAIRSEL_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd.args(args).output().unwrap()
}

#[test]
fn writes_selection_with_default_database_path() {
    let dir = tempfile::tempdir().unwrap();
    build_store(&dir.path().join("docs.db"));

    let output = pairsel(dir.path(), &["2", "out.csv", "--seed", "3", "--threads", "2"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("0,1,p1,f1,m1,2,p2,f2,m2,"));
    assert!(lines[2].starts_with("1,1,p1,f1,m1,3,p3,f3,m3,"));
}

#[test]
fn missing_database_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = pairsel(dir.path(), &["2", "out.csv", "--db", "nowhere.db"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[E] "), "{stderr}");
    assert!(!dir.path().join("out.csv").exists());
    assert!(!dir.path().join("nowhere.db").exists());
}

#[test]
fn oversized_target_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    build_store(&dir.path().join("docs.db"));

    let output = pairsel(dir.path(), &["10", "out.csv"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[E] "), "{stderr}");
    assert!(stderr.contains("only 3 distinct candidates"), "{stderr}");
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn project_config_file_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    build_store(&dir.path().join("pairs.db"));
    fs::write(
        dir.path().join("pairsel.toml"),
        "[storage]\ndb_path = \"pairs.db\"\n\n[selection]\nseed = 5\nthreads = 1\n",
    )
    .unwrap();

    let output = pairsel(dir.path(), &["1", "out.csv"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let text = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn invalid_config_value_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    build_store(&dir.path().join("docs.db"));

    let output = pairsel(dir.path(), &["1", "out.csv", "--random-fraction", "1.5"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[E] "));
}

#[test]
fn bad_arguments_are_rejected_by_the_parser() {
    let dir = tempfile::tempdir().unwrap();
    let output = pairsel(dir.path(), &["many", "out.csv"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("out.csv").exists());
}
