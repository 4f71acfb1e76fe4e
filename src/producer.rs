//! The record producer.
//!
//! The producer appends one freshly generated record to the log at a fixed
//! cadence, indefinitely. It never reads the log, and it stops only when the
//! process does: an append failure is propagated to the caller as fatal.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::config::ProducerConfig;
use crate::error::Result;
use crate::log::RelayLog;
use crate::model::Record;

/// Source of generated record values.
///
/// This seam exists so tests can substitute a deterministic source; the
/// production implementation is [`RandomSource`].
pub trait RecordSource: Send + Sync {
    /// Draws the next record to append.
    fn next_record(&self) -> Record;
}

/// The default source: uniformly random values in `0..32768`.
#[derive(Debug, Default)]
pub struct RandomSource;

impl RecordSource for RandomSource {
    fn next_record(&self) -> Record {
        Record::new(rand::thread_rng().gen_range(0..32768))
    }
}

/// Appends generated records to the log on a fixed interval.
///
/// # Example
///
/// ```ignore
/// use relay::{Producer, ProducerConfig, RelayLog, RelayConfig};
///
/// let log = RelayLog::open(RelayConfig { path: "relay.log".into() });
/// let producer = Producer::new(log, ProducerConfig::default());
///
/// // Runs until an append fails or the task is dropped.
/// tokio::spawn(async move { producer.run().await });
/// ```
pub struct Producer {
    log: RelayLog,
    source: Arc<dyn RecordSource>,
    interval: Duration,
}

impl Producer {
    /// Creates a producer with the default [`RandomSource`].
    pub fn new(log: RelayLog, config: ProducerConfig) -> Self {
        Self::with_source(log, config, Arc::new(RandomSource))
    }

    /// Creates a producer with a custom record source.
    pub fn with_source(log: RelayLog, config: ProducerConfig, source: Arc<dyn RecordSource>) -> Self {
        Self {
            log,
            source,
            interval: config.interval,
        }
    }

    /// Generates one record and appends it to the log.
    ///
    /// One tick is exactly one appended line. Returns the record that was
    /// written.
    ///
    /// # Errors
    ///
    /// Propagates any append failure; there is no retry.
    pub async fn tick(&self) -> Result<Record> {
        let record = self.source.next_record();
        self.log.append(&record).await?;
        tracing::debug!(value = record.value(), "appended record");
        Ok(record)
    }

    /// Runs the produce loop: tick, sleep, repeat.
    ///
    /// There is no termination condition; the loop runs until the task is
    /// dropped or an append fails, in which case the error is returned and
    /// the caller is expected to exit.
    pub async fn run(self) -> Result<()> {
        tracing::info!(
            path = %self.log.path().display(),
            interval_ms = self.interval.as_millis() as u64,
            "producer started"
        );
        loop {
            self.tick().await?;
            tokio::time::sleep(self.interval).await;
        }
    }
}
