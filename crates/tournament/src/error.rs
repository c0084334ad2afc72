//! Failures of the CSV files backing a tournament

use std::path::PathBuf;
use swiss_core::TournamentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot write JSON export {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("a tournament needs at least {min} {what}, got {got}")]
    TooSmall {
        what: &'static str,
        min: usize,
        got: usize,
    },
}

impl StoreError {
    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        StoreError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<StoreError> for TournamentError {
    fn from(e: StoreError) -> Self {
        TournamentError::Store(Box::new(e))
    }
}

/// A row that was ignored while reading a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub file: PathBuf,
    pub line: u64,
    pub reason: String,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file.display(), self.line, self.reason)
    }
}
