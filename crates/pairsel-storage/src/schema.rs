//! DDL and insert helpers for the two upstream tables.
//!
//! pairsel only reads these tables. The helpers exist to build fixture
//! databases with the same shape the upstream pipeline produces.

use pairsel_core::errors::StorageError;
use pairsel_core::types::PairRecord;
use rusqlite::{params, Connection};

/// Create `methodsim` and `internal_filtered_methoddocs` if absent.
pub fn create_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS methodsim (
            project1 TEXT NOT NULL,
            file1    TEXT NOT NULL,
            method1  TEXT NOT NULL,
            project2 TEXT NOT NULL,
            file2    TEXT NOT NULL,
            method2  TEXT NOT NULL,
            sim_cs   REAL NOT NULL,
            sim_tok  REAL NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_methodsim_sim_cs ON methodsim(sim_cs);

        CREATE TABLE IF NOT EXISTS internal_filtered_methoddocs (
            id         INTEGER PRIMARY KEY,
            project_id INTEGER NOT NULL DEFAULT 0,
            file       TEXT NOT NULL,
            method     TEXT NOT NULL,
            kwset      TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_methoddocs_file_method
            ON internal_filtered_methoddocs(file, method);
        ",
    )
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to create schema: {e}"),
    })
}

/// Insert one pair record into `methodsim` (base similarity in `sim_cs`).
pub fn insert_pair(conn: &Connection, record: &PairRecord) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO methodsim
            (project1, file1, method1, project2, file2, method2, sim_cs, sim_tok)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.project1,
            record.file1,
            record.method1,
            record.project2,
            record.file2,
            record.method2,
            record.sim,
            record.sim_tok,
        ],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Insert one documented method and return its identifier.
pub fn insert_method_doc(conn: &Connection, file: &str, method: &str) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO internal_filtered_methoddocs (file, method) VALUES (?1, ?2)",
        params![file, method],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(conn.last_insert_rowid())
}
