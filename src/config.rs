//! Configuration for the relay log and producer.
//!
//! Both components receive explicit configuration at construction; there is
//! no ambient global state beyond what the caller passes in.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for opening a [`RelayLog`](crate::RelayLog).
///
/// # Example
///
/// ```
/// use relay::RelayConfig;
///
/// let config = RelayConfig {
///     path: "/data/relay.log".into(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the log file.
    ///
    /// The file is created on the producer's first append; the reader never
    /// creates it and reports absence until then.
    pub path: PathBuf,
}

/// Configuration for the [`Producer`](crate::Producer).
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    /// Time to sleep between ticks.
    ///
    /// Each tick appends exactly one record. The default matches the
    /// original two-second cadence.
    pub interval: Duration,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
        }
    }
}

/// Parse a duration string (e.g., "500ms", "2s", "1m", "2h").
///
/// A bare number is interpreted as seconds.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::InvalidConfig("empty duration string".to_string()));
    }

    // Find where the numeric part ends
    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());

    if num_end == 0 {
        return Err(Error::InvalidConfig(
            "duration must start with a number".to_string(),
        ));
    }

    let value: f64 = s[..num_end]
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("invalid duration number: {}", s)))?;
    let unit = &s[num_end..];

    let multiplier = match unit {
        "ms" => 0.001,
        "s" | "" => 1.0,
        "m" => 60.0,
        "h" => 3600.0,
        "d" => 86400.0,
        _ => {
            return Err(Error::InvalidConfig(format!(
                "unknown duration unit: {}",
                unit
            )));
        }
    };

    Ok(Duration::from_secs_f64(value * multiplier))
}
