// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! logrdr library: severity classification of log files.
//!
//! A single pass reads the log line by line, recognizes where each message
//! starts, assigns it a severity level and counts it. Records can optionally
//! be persisted to SQLite through the [`sink::RecordSink`] seam.

pub mod classify;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod level;
pub mod pattern;
pub mod reader;
pub mod report;
pub mod run;
pub mod sink;
pub mod store;
pub mod system;
pub mod timer;
pub mod tuning;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;
