// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern matching for message boundaries and severity levels.
//!
//! - Message start: a timestamp-bearing first line of a log entry
//! - Levels: plain upper-case tokens (`ERROR`) or bracketed words
//!   (`[Error]`, `[error]`), tried in fixed priority order

pub mod matcher;

pub use matcher::{CompiledPattern, LEVEL_PATTERNS, MESSAGE_START, PatternError, PatternSet};
