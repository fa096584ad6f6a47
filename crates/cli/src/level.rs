// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Severity levels assigned to log messages.

use std::fmt;

use serde::Serialize;

/// Severity of a single log message.
///
/// `Unknown` is assigned to messages whose header matched the message-start
/// pattern but none of the level patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Unknown,
}

impl SeverityLevel {
    /// The reportable levels in match priority order.
    pub const ALL: [SeverityLevel; 6] = [
        SeverityLevel::Trace,
        SeverityLevel::Debug,
        SeverityLevel::Info,
        SeverityLevel::Warn,
        SeverityLevel::Error,
        SeverityLevel::Fatal,
    ];

    /// Integer code stored in the `level` column.
    pub fn code(self) -> i64 {
        match self {
            SeverityLevel::Trace => 0,
            SeverityLevel::Debug => 1,
            SeverityLevel::Info => 2,
            SeverityLevel::Warn => 3,
            SeverityLevel::Error => 4,
            SeverityLevel::Fatal => 5,
            SeverityLevel::Unknown => 6,
        }
    }

    /// Inverse of [`SeverityLevel::code`].
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(SeverityLevel::Trace),
            1 => Some(SeverityLevel::Debug),
            2 => Some(SeverityLevel::Info),
            3 => Some(SeverityLevel::Warn),
            4 => Some(SeverityLevel::Error),
            5 => Some(SeverityLevel::Fatal),
            6 => Some(SeverityLevel::Unknown),
            _ => None,
        }
    }

    /// Single-letter tag used in the text report.
    pub fn tag(self) -> char {
        match self {
            SeverityLevel::Trace => 'T',
            SeverityLevel::Debug => 'D',
            SeverityLevel::Info => 'I',
            SeverityLevel::Warn => 'W',
            SeverityLevel::Error => 'E',
            SeverityLevel::Fatal => 'F',
            SeverityLevel::Unknown => 'U',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SeverityLevel::Trace => "trace",
            SeverityLevel::Debug => "debug",
            SeverityLevel::Info => "info",
            SeverityLevel::Warn => "warn",
            SeverityLevel::Error => "error",
            SeverityLevel::Fatal => "fatal",
            SeverityLevel::Unknown => "unknown",
        }
    }

    /// Slot in [`crate::classify::Counters`]; `Unknown` takes the last slot.
    pub(crate) fn index(self) -> usize {
        self.code() as usize
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
