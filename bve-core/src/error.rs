//! Errors in the library.
use std::path::PathBuf;
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum BveError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// A record written to a CSV log has a key that is not in the header.
    #[error("Key '{key}' is not a column of {path:?}")]
    CsvColumnError {
        /// The offending key.
        key: String,
        /// Path of the CSV log.
        path: PathBuf,
    },

    /// A record was written to a logger after it was closed.
    #[error("Logger '{0}' has been closed")]
    LoggerClosed(String),
}
