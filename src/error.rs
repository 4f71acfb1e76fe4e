//! Error types for relay operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while appending to or reading the log.
#[derive(Debug, Error)]
pub enum Error {
    /// The log file does not exist yet.
    ///
    /// The reader never creates the log; until the producer's first append
    /// there is nothing to serve and reads report absence.
    #[error("log not found at {0}")]
    NotFound(PathBuf),

    /// An I/O error from the underlying filesystem.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed as a record.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for relay operations.
pub type Result<T> = std::result::Result<T, Error>;
