//! Error types for csvreportlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a table or producing reports
#[derive(Error, Debug)]
pub enum CsvReportError {
    /// A line's cell count differs from the first processed line
    #[error(
        "csv column count mismatch: expecting {expected} columns but found a row with \
         {found} columns at line number {line_number} - {line}"
    )]
    StructuralMismatch {
        expected: usize,
        found: usize,
        /// 1-indexed position of the offending line in the source
        line_number: usize,
        line: String,
    },

    /// Input source does not exist
    #[error("csv source not found: {0}")]
    SourceNotFound(PathBuf),

    /// Input source exists but could not be read
    #[error("failed to read csv source '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Requested column is not part of the table
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Two values derive the same sort key
    #[error("duplicate sort key '{key}' derived from '{first}' and '{second}'")]
    DuplicateSortKey {
        key: String,
        first: String,
        second: String,
    },

    /// Failed to persist a report artifact
    #[error("failed to write report '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}
