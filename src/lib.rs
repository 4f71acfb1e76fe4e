//! Relay - a minimal file-relay service.
//!
//! Relay couples two independent components through a shared append-only
//! log file:
//!
//! - **Producer**: appends one generated record to the log at a fixed
//!   cadence, indefinitely.
//! - **Server**: returns the log's current full contents on each request,
//!   reading the file fresh every time.
//!
//! The only coupling between the two is the log's file path and the
//! happens-before relationship induced by the filesystem: every append is
//! flushed before it returns, so a read that starts afterwards observes it.
//!
//! # Key Concepts
//!
//! - **RelayLog**: The append-side handle to the log file.
//! - **LogReader**: A read-only view of the log, used by the server so it
//!   never holds write access.
//! - **Record**: One generated value, one line of the log. Once written, a
//!   record is never modified or removed; ordering is the only structural
//!   invariant.
//!
//! # Example
//!
//! ```ignore
//! use relay::{RelayLog, RelayConfig, LogRead, Producer, ProducerConfig};
//!
//! // Open a log bound to a path
//! let log = RelayLog::open(RelayConfig { path: "/data/relay.log".into() });
//!
//! // Append records on a fixed cadence
//! let producer = Producer::new(log.clone(), ProducerConfig::default());
//! tokio::spawn(async move { producer.run().await });
//!
//! // Read the full contents back
//! let contents = log.reader().read_all().await?;
//! ```

mod config;
mod error;
mod log;
mod model;
mod producer;
mod reader;
#[cfg(feature = "http-server")]
pub mod server;

pub use config::{Config as RelayConfig, ProducerConfig, parse_duration};
pub use error::{Error, Result};
pub use log::RelayLog;
pub use model::Record;
pub use producer::{Producer, RandomSource, RecordSource};
pub use reader::{LogRead, LogReader};
