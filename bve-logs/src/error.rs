//! Errors in the library.
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading logs or plotting them.
#[derive(Error, Debug)]
pub enum LogError {
    /// A log file could not be opened.
    #[error("Failed to open {path:?}: {source}")]
    Open {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A log file is not valid CSV.
    #[error("Failed to read {path:?}: {source}")]
    Csv {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying error.
        source: csv::Error,
    },

    /// The selected column does not exist.
    #[error("Column {column} not found in {path:?}")]
    MissingColumn {
        /// Path of the log file.
        path: PathBuf,
        /// The selected column.
        column: String,
    },

    /// A row is too short for the selected column.
    #[error("Line {line} of {path:?} has no column {column}")]
    MissingCell {
        /// Path of the log file.
        path: PathBuf,
        /// Line of the row in the file.
        line: u64,
        /// The selected column.
        column: String,
    },

    /// A cell could not be parsed to the requested type.
    #[error("Cannot parse '{value}' at line {line}, column {column} of {path:?}")]
    Parse {
        /// Path of the log file.
        path: PathBuf,
        /// Line of the row in the file.
        line: u64,
        /// The selected column.
        column: String,
        /// Content of the cell.
        value: String,
    },

    /// Steps and returns of a curve differ in length.
    #[error("{steps} steps but {returns} returns")]
    LengthMismatch {
        /// Number of steps.
        steps: usize,
        /// Number of returns.
        returns: usize,
    },

    /// Rendering a plot failed.
    #[error("Plot error: {0}")]
    Plot(String),
}
