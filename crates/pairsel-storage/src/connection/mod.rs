//! Connection management for the similarity database.

pub mod pragmas;

use std::path::{Path, PathBuf};

use pairsel_core::errors::StorageError;
use pairsel_core::traits::{IdentResolver, PairSource};
use pairsel_core::types::PairRecord;
use rusqlite::{Connection, OpenFlags};

use self::pragmas::apply_read_pragmas;
use crate::queries;

/// Read-only handle on the similarity database.
pub struct SimilarityDb {
    conn: Connection,
    similarity_column: String,
    path: Option<PathBuf>,
}

impl SimilarityDb {
    /// Open an existing database read-only. A missing file is an error,
    /// never an implicitly created empty database.
    pub fn open(path: &Path, similarity_column: &str) -> Result<Self, StorageError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StorageError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        apply_read_pragmas(&conn)?;

        tracing::debug!(path = %path.display(), column = similarity_column, "opened similarity db");

        Ok(Self {
            conn,
            similarity_column: similarity_column.to_string(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an existing connection (for testing against in-memory data).
    pub fn from_connection(conn: Connection, similarity_column: &str) -> Self {
        Self {
            conn,
            similarity_column: similarity_column.to_string(),
            path: None,
        }
    }

    /// Execute a closure with the underlying connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        f(&self.conn)
    }

    /// Column read as the base similarity.
    pub fn similarity_column(&self) -> &str {
        &self.similarity_column
    }

    /// Database file path (None when wrapping a connection).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PairSource for SimilarityDb {
    fn count_pairs(&self, threshold: f64) -> Result<usize, StorageError> {
        queries::pairs::count_pairs(&self.conn, &self.similarity_column, threshold)
    }

    fn visit_pairs(
        &self,
        threshold: f64,
        visit: &mut dyn FnMut(PairRecord),
    ) -> Result<usize, StorageError> {
        queries::pairs::visit_pairs(&self.conn, &self.similarity_column, threshold, visit)
    }
}

impl IdentResolver for SimilarityDb {
    fn resolve_ident(&self, file: &str, method: &str) -> Result<Option<i64>, StorageError> {
        queries::idents::lookup_ident(&self.conn, file, method)
    }
}
