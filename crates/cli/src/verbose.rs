// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose diagnostics on stderr.
//!
//! With `--verbose`, a run describes how the record store was tuned and
//! how many records it holds.

use std::fmt::Display;

/// Writes aligned `name: value` lines under section headers when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    pub fn field(&self, name: &str, value: impl Display) {
        if self.enabled {
            eprintln!("  {:<16} {}", format!("{}:", name), value);
        }
    }
}
