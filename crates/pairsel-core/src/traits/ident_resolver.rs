//! Lookup of externally stored method identifiers.

use crate::errors::StorageError;

/// Resolves a `(file, method)` pair to the identifier stored upstream.
pub trait IdentResolver {
    /// `Ok(None)` when no row matches exactly.
    fn resolve_ident(&self, file: &str, method: &str) -> Result<Option<i64>, StorageError>;
}
