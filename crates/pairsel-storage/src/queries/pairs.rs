//! methodsim queries.

use pairsel_core::config::storage_config::is_sql_identifier;
use pairsel_core::errors::StorageError;
use pairsel_core::types::PairRecord;
use rusqlite::{params, Connection};

fn check_column(column: &str) -> Result<(), StorageError> {
    if is_sql_identifier(column) {
        Ok(())
    } else {
        Err(StorageError::InvalidRecord {
            table: "methodsim".to_string(),
            message: format!("{column:?} is not a valid similarity column"),
        })
    }
}

/// Count pairs whose similarity column exceeds `threshold`.
pub fn count_pairs(conn: &Connection, column: &str, threshold: f64) -> Result<usize, StorageError> {
    check_column(column)?;
    let sql = format!("SELECT count(*) FROM methodsim WHERE {column} > ?1");
    let count: i64 = conn
        .query_row(&sql, params![threshold], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(count.max(0) as usize)
}

/// Stream pairs whose similarity column exceeds `threshold`, highest first.
/// Returns the number of rows visited.
pub fn visit_pairs(
    conn: &Connection,
    column: &str,
    threshold: f64,
    visit: &mut dyn FnMut(PairRecord),
) -> Result<usize, StorageError> {
    check_column(column)?;
    let sql = format!(
        "SELECT project1, file1, method1, project2, file2, method2, {column} AS sim, sim_tok
         FROM methodsim
         WHERE {column} > ?1
         ORDER BY {column} DESC"
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;

    let mut rows = stmt
        .query(params![threshold])
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let mut visited = 0;
    while let Some(row) = rows.next().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })? {
        let record = PairRecord {
            project1: row.get(0).map_err(invalid_row)?,
            file1: row.get(1).map_err(invalid_row)?,
            method1: row.get(2).map_err(invalid_row)?,
            project2: row.get(3).map_err(invalid_row)?,
            file2: row.get(4).map_err(invalid_row)?,
            method2: row.get(5).map_err(invalid_row)?,
            sim: row.get(6).map_err(invalid_row)?,
            sim_tok: row.get(7).map_err(invalid_row)?,
        };
        visit(record);
        visited += 1;
    }
    Ok(visited)
}

fn invalid_row(e: rusqlite::Error) -> StorageError {
    StorageError::InvalidRecord {
        table: "methodsim".to_string(),
        message: e.to_string(),
    }
}
