//! Core append-only log implementation.
//!
//! This module provides [`RelayLog`], the append-side handle to the shared
//! log file. The log is an unbounded ordered sequence of records, one per
//! line; records are only ever appended, never modified or removed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::error::Result;
use crate::model::Record;
use crate::reader::{LogRead, LogReader, count_records, read_contents};

/// The append-side handle to the relay log.
///
/// `RelayLog` binds the log to its file path. The file itself is created on
/// the first append; opening the log performs no I/O.
///
/// # Visibility Contract
///
/// [`append`](RelayLog::append) writes the whole record line in a single
/// write and flushes before returning. A read that starts after `append`
/// returns therefore observes the full line. A read racing an in-flight
/// append may observe a prefix of it; the window is a single write syscall,
/// but no byte-level atomicity is claimed.
///
/// # Writer Semantics
///
/// The log expects a single writer (the producer). Reads take no locks and
/// may proceed concurrently with appends.
///
/// # Example
///
/// ```ignore
/// use relay::{RelayLog, RelayConfig, Record, LogRead};
///
/// let log = RelayLog::open(RelayConfig { path: "relay.log".into() });
/// log.append(&Record::new(42)).await?;
/// assert_eq!(log.count().await?, 1);
/// ```
#[derive(Debug, Clone)]
pub struct RelayLog {
    path: Arc<PathBuf>,
}

impl RelayLog {
    /// Binds a log to the path in the given configuration.
    ///
    /// Does not create or touch the file.
    pub fn open(config: Config) -> Self {
        Self {
            path: Arc::new(config.path),
        }
    }

    /// Returns the path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record to the log.
    ///
    /// Opens the file in append mode (creating it if necessary), writes the
    /// record's full line in a single write, and flushes before returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened
    /// or written. Callers treat this as fatal; there is no retry.
    pub async fn append(&self, record: &Record) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path.as_ref())
            .await?;

        // One buffer, one write: keeps the partial-read window to a single
        // write syscall.
        file.write_all(record.to_line().as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns a read-only view of this log.
    pub fn reader(&self) -> LogReader {
        LogReader::new(Arc::clone(&self.path))
    }
}

#[async_trait]
impl LogRead for RelayLog {
    async fn read_all(&self) -> Result<Bytes> {
        read_contents(&self.path).await
    }

    async fn count(&self) -> Result<u64> {
        let contents = read_contents(&self.path).await?;
        Ok(count_records(&contents))
    }
}
