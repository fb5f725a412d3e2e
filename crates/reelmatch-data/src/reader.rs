//! CSV/TSV reading helpers shared by the loaders.
//!
//! Cells are read as strings and coerced afterwards, so a malformed number
//! becomes a missing value instead of failing the whole file.

use reelmatch_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Field delimiter of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma-separated, RFC 4180 quoting.
    Comma,
    /// Tab-separated, no quoting (IMDb dumps).
    Tab,
}

/// Opens a headed dataset file for reading.
pub fn open_reader(path: &Path, delimiter: Delimiter) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| Error::io_with_path(e, path))?;
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true);
    if delimiter == Delimiter::Tab {
        builder.delimiter(b'\t').quoting(false);
    }
    Ok(builder.from_reader(file))
}

/// Converts a row-level CSV error into a dataset error carrying the line.
pub fn row_error(path: &Path, err: csv::Error) -> Error {
    let message = match err.position() {
        Some(pos) => format!("unreadable record at line {}", pos.line()),
        None => "unreadable record".to_string(),
    };
    Error::dataset_with_source(path, message, err)
}

/// Reads every row of a headed file into `T`.
pub fn read_all<T: DeserializeOwned>(path: &Path, delimiter: Delimiter) -> Result<Vec<T>> {
    let mut reader = open_reader(path, delimiter)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| row_error(path, e))?;
    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Returns the cell content, or `None` for the null markers
/// (empty, `\N`, `NaN`). The literal `NA` is kept.
pub fn cell(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    match trimmed {
        "" | "\\N" | "NaN" | "nan" => None,
        _ => Some(trimmed),
    }
}

/// Parses a numeric cell, treating anything unparsable as missing.
pub fn coerce_f64(raw: &str) -> Option<f64> {
    cell(raw)?.parse::<f64>().ok().filter(|v| v.is_finite())
}
