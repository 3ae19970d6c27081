//! internal_filtered_methoddocs lookups.

use pairsel_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

/// Identifier of the method documented at exactly `(file, method)`.
pub fn lookup_ident(
    conn: &Connection,
    file: &str,
    method: &str,
) -> Result<Option<i64>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id FROM internal_filtered_methoddocs WHERE file = ?1 AND method = ?2",
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    stmt.query_row(params![file, method], |row| row.get(0))
        .optional()
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}
