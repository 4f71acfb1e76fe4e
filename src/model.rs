//! Core data types for the relay log.
//!
//! This module defines [`Record`], the unit of data written to the log.
//! A record is one generated value; its wire form is the decimal rendering
//! of the value followed by a line terminator.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A single record of the log.
///
/// Records are the unit of data appended by the producer. Each record holds
/// one generated value and occupies exactly one line of the log file. Once
/// written, a record is never modified or removed.
///
/// # Example
///
/// ```
/// use relay::Record;
///
/// let record = Record::new(42);
/// assert_eq!(record.to_line(), "42\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    value: u32,
}

impl Record {
    /// Creates a record holding the given value.
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Returns the record's value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Renders the record as a log line, including the terminator.
    ///
    /// The whole line is handed to the log as one buffer so that an append
    /// is a single write.
    pub fn to_line(&self) -> String {
        format!("{}\n", self.value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Record {
    type Err = Error;

    /// Parses a log line (without its terminator) back into a record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim_end_matches(['\r', '\n'])
            .parse::<u32>()
            .map_err(|_| Error::InvalidRecord(s.to_string()))?;
        Ok(Self { value })
    }
}
