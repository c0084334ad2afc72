//! CSV sheets: rosters, the MAIN snapshot and round results
//!
//! All readers share the same tolerance rules: headers are looked up by name,
//! cells are trimmed, and an empty cell counts as missing. Rows that cannot be
//! used are collected as [`SkippedRow`]s instead of failing the whole file.

pub mod results;
pub mod roster;
pub mod snapshot;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::{SkippedRow, StoreError};

/// Header name -> column index
pub(crate) struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    pub(crate) fn new(headers: &StringRecord) -> Self {
        Self {
            index: headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.trim().to_string(), i))
                .collect(),
        }
    }

    pub(crate) fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub(crate) fn require(&self, path: &Path, name: &str) -> Result<(), StoreError> {
        if self.has(name) {
            Ok(())
        } else {
            Err(StoreError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
        }
    }

    /// Trimmed cell value; `None` when the column is absent or the cell empty
    pub(crate) fn get<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.index
            .get(name)
            .and_then(|&i| record.get(i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

pub(crate) fn open_reader(path: &Path) -> Result<(csv::Reader<File>, Columns), StoreError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| StoreError::csv(path, e))?;
    let columns = Columns::new(reader.headers().map_err(|e| StoreError::csv(path, e))?);
    Ok((reader, columns))
}

pub(crate) fn skipped(path: &Path, record: &StringRecord, reason: String) -> SkippedRow {
    SkippedRow {
        file: path.to_path_buf(),
        line: record.position().map(|p| p.line()).unwrap_or(0),
        reason,
    }
}

/// Fixed one-decimal rendering used for every point column
pub(crate) fn points(value: f64) -> String {
    format!("{:.1}", value)
}
