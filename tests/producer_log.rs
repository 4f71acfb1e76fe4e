//! End-to-end tests for the producer and the shared log.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use relay::{
    Error, LogRead, Producer, ProducerConfig, Record, RecordSource, RelayConfig, RelayLog,
};

/// Deterministic source yielding 0, 1, 2, ...
struct SequentialSource {
    next: AtomicU32,
}

impl SequentialSource {
    fn new() -> Self {
        Self {
            next: AtomicU32::new(0),
        }
    }
}

impl RecordSource for SequentialSource {
    fn next_record(&self) -> Record {
        Record::new(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

fn setup(dir: &tempfile::TempDir, interval: Duration) -> (RelayLog, Producer) {
    let log = RelayLog::open(RelayConfig {
        path: dir.path().join("relay.log"),
    });
    let producer = Producer::with_source(
        log.clone(),
        ProducerConfig { interval },
        Arc::new(SequentialSource::new()),
    );
    (log, producer)
}

#[tokio::test]
async fn test_log_contains_exactly_n_lines_after_n_ticks() {
    for n in [0u64, 1, 3, 10] {
        let dir = tempfile::tempdir().unwrap();
        let (log, producer) = setup(&dir, Duration::from_secs(2));

        for _ in 0..n {
            producer.tick().await.unwrap();
        }

        if n == 0 {
            // Zero ticks: the log does not exist yet.
            assert!(matches!(log.read_all().await, Err(Error::NotFound(_))));
        } else {
            assert_eq!(log.count().await.unwrap(), n);
        }
    }
}

#[tokio::test]
async fn test_records_appear_in_generation_order() {
    let dir = tempfile::tempdir().unwrap();
    let (log, producer) = setup(&dir, Duration::from_secs(2));

    for _ in 0..5 {
        producer.tick().await.unwrap();
    }

    let contents = log.read_all().await.unwrap();
    let values: Vec<u32> = String::from_utf8(contents.to_vec())
        .unwrap()
        .lines()
        .map(|l| l.parse::<Record>().unwrap().value())
        .collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_run_loop_keeps_appending_on_interval() {
    let dir = tempfile::tempdir().unwrap();
    let (log, producer) = setup(&dir, Duration::from_millis(10));

    let task = tokio::spawn(producer.run());
    tokio::time::sleep(Duration::from_millis(100)).await;
    task.abort();

    let count = log.count().await.unwrap();
    assert!(count >= 2, "expected several ticks, got {}", count);

    // Every line the loop wrote is a complete, well-formed record.
    let contents = log.read_all().await.unwrap();
    let text = String::from_utf8(contents.to_vec()).unwrap();
    assert!(text.ends_with('\n'));
    for line in text.lines() {
        line.parse::<Record>().unwrap();
    }
}

#[tokio::test]
async fn test_reader_never_creates_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let (log, _producer) = setup(&dir, Duration::from_secs(2));
    let reader = log.reader();

    assert!(matches!(reader.read_all().await, Err(Error::NotFound(_))));
    assert!(matches!(reader.count().await, Err(Error::NotFound(_))));

    // Reading must not have created the file.
    assert!(!log.path().exists());
}

#[tokio::test]
async fn test_two_handles_one_file() {
    // The producer writes through one handle while a reader bound to the
    // same path observes every completed append.
    let dir = tempfile::tempdir().unwrap();
    let (log, producer) = setup(&dir, Duration::from_secs(2));
    let reader = log.reader();

    producer.tick().await.unwrap();
    assert_eq!(reader.count().await.unwrap(), 1);

    producer.tick().await.unwrap();
    assert_eq!(reader.count().await.unwrap(), 2);
}
