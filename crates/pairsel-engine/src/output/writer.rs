//! CSV output of a finished selection.

use std::fs;
use std::path::{Path, PathBuf};

use pairsel_core::constants::OUTPUT_HEADER;
use pairsel_core::errors::{OutputError, RunError};
use pairsel_core::traits::IdentResolver;
use pairsel_core::types::{FrozenIdents, FxHashMap};
use serde::Serialize;

use crate::loader::MethodRef;
use crate::selection::Selection;

/// One output row, serialized in header order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub pairid: usize,
    pub ident1: i64,
    pub project1: String,
    pub file1: String,
    pub method1: String,
    pub ident2: i64,
    pub project2: String,
    pub file2: String,
    pub method2: String,
    pub sim: f64,
    pub sim_tok: f64,
}

/// Resolve stored identifiers for every selection and build the rows.
///
/// Fails on the first method ref with no stored identifier. Nothing is
/// written here.
pub fn build_records<R: IdentResolver + ?Sized>(
    selections: &[Selection],
    idents: &FrozenIdents,
    resolver: &R,
) -> Result<Vec<OutputRecord>, RunError> {
    let mut cache: FxHashMap<MethodRef, i64> = FxHashMap::default();
    let mut lookup = |method_ref: MethodRef| -> Result<i64, RunError> {
        if let Some(&id) = cache.get(&method_ref) {
            return Ok(id);
        }
        let file = idents.resolve(method_ref.file);
        let method = idents.resolve(method_ref.method);
        let id = resolver
            .resolve_ident(file, method)?
            .ok_or_else(|| OutputError::MissingIdentifier {
                file: file.to_string(),
                method: method.to_string(),
            })?;
        cache.insert(method_ref, id);
        Ok(id)
    };

    let mut records = Vec::with_capacity(selections.len());
    for selection in selections {
        let c = &selection.candidate;
        let ident1 = lookup(c.first)?;
        let ident2 = lookup(c.second)?;
        records.push(OutputRecord {
            pairid: selection.sequence,
            ident1,
            project1: idents.resolve(c.project1).to_string(),
            file1: idents.resolve(c.first.file).to_string(),
            method1: idents.resolve(c.first.method).to_string(),
            ident2,
            project2: idents.resolve(c.project2).to_string(),
            file2: idents.resolve(c.second.file).to_string(),
            method2: idents.resolve(c.second.method).to_string(),
            sim: c.base_sim,
            sim_tok: c.token_sim,
        });
    }
    Ok(records)
}

/// Write `records` as CSV to `path`.
///
/// Rows go to a temporary sibling first, which is renamed over `path` only
/// after a successful flush.
pub fn write_csv(path: &Path, records: &[OutputRecord]) -> Result<(), OutputError> {
    let tmp = temp_sibling(path);
    let result = write_rows(&tmp, records).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| write_failed(path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_rows(path: &Path, records: &[OutputRecord]) -> Result<(), OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| write_failed(path, e))?;
    writer
        .write_record(OUTPUT_HEADER)
        .map_err(|e| write_failed(path, e))?;
    for record in records {
        writer.serialize(record).map_err(|e| write_failed(path, e))?;
    }
    writer.flush().map_err(|e| write_failed(path, e))
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_failed(path: &Path, err: impl std::fmt::Display) -> OutputError {
    OutputError::WriteFailed {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
