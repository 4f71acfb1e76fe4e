//! Read-only log access and the [`LogRead`] trait.
//!
//! This module provides:
//! - [`LogRead`]: The trait defining read operations on the log.
//! - [`LogReader`]: A read-only view of the log that implements `LogRead`.
//!
//! The server side of the relay only ever holds a [`LogReader`], so write
//! access stays confined to the producer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{Error, Result};

/// Trait for read operations on the log.
///
/// Implemented by both [`RelayLog`](crate::RelayLog) and [`LogReader`], so
/// generic code can work with either handle.
///
/// # Read Visibility
///
/// Every read opens the file fresh; nothing is cached between calls. A read
/// that starts after an append has returned observes that append, because
/// appends are flushed before returning. A read racing an in-flight append
/// may observe a prefix of the line being written.
#[async_trait]
pub trait LogRead {
    /// Reads the log's current full contents.
    ///
    /// Returns the file's byte sequence verbatim, with no transformation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the log file does not exist yet, or
    /// [`Error::Io`] for any other filesystem failure.
    async fn read_all(&self) -> Result<Bytes>;

    /// Counts the complete records currently in the log.
    ///
    /// A record is complete once its line terminator is on disk, so this is
    /// the number of line terminators in the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the log file does not exist yet.
    async fn count(&self) -> Result<u64>;
}

/// A read-only view of the log.
///
/// Cheap to clone and share; holds only the log's path. Obtained from
/// [`RelayLog::reader`](crate::RelayLog::reader).
#[derive(Debug, Clone)]
pub struct LogReader {
    path: Arc<PathBuf>,
}

impl LogReader {
    pub(crate) fn new(path: Arc<PathBuf>) -> Self {
        Self { path }
    }

    /// Returns the path of the log file this reader is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogRead for LogReader {
    async fn read_all(&self) -> Result<Bytes> {
        read_contents(&self.path).await
    }

    async fn count(&self) -> Result<u64> {
        let contents = read_contents(&self.path).await?;
        Ok(count_records(&contents))
    }
}

/// Reads the full contents of the log file at `path`.
///
/// Maps a missing file to [`Error::NotFound`] so callers can distinguish
/// absence (the producer has not written yet) from real I/O failures.
pub(crate) async fn read_contents(path: &Path) -> Result<Bytes> {
    match tokio::fs::read(path).await {
        Ok(contents) => Ok(Bytes::from(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound(path.to_path_buf())),
        Err(e) => Err(Error::Io(e)),
    }
}

/// Counts complete records (terminated lines) in a byte buffer.
pub(crate) fn count_records(contents: &[u8]) -> u64 {
    contents.iter().filter(|&&b| b == b'\n').count() as u64
}
