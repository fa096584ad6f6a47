// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record persistence seam.
//!
//! The classifier hands each finished message to a [`RecordSink`]. The
//! SQLite implementation lives in [`crate::store`]; [`MemorySink`] keeps
//! records in memory.

use serde::Serialize;

use crate::error::PersistenceError;
use crate::level::SeverityLevel;

/// One classified log message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// The line that matched the message-start pattern.
    pub header: String,
    /// Continuation lines joined with `\n`; empty when there were none.
    pub body: String,
    pub level: SeverityLevel,
}

impl LogRecord {
    pub fn new(header: impl Into<String>, level: SeverityLevel) -> Self {
        Self {
            header: header.into(),
            body: String::new(),
            level,
        }
    }
}

/// Destination for classified records.
pub trait RecordSink {
    /// Persist one record. Failures are reported by the caller and do not
    /// stop classification.
    fn store(&mut self, record: LogRecord) -> Result<(), PersistenceError>;
}

/// Sink that keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<LogRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn store(&mut self, record: LogRecord) -> Result<(), PersistenceError> {
        self.records.push(record);
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
