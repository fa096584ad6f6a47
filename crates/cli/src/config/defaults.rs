// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these constants via their `default_*` methods.

/// Line reader defaults.
pub mod reader {
    /// Default max line length in bytes (8192). Longer lines are truncated.
    pub const MAX_LINE_LENGTH: usize = crate::reader::DEFAULT_MAX_LINE_LENGTH;
}

/// Record store defaults.
pub mod store {
    /// Default page size in bytes (1024).
    pub const PAGE_SIZE: u64 = 1024;

    /// The cache may use at most 1/5 of physical memory.
    pub const MEMORY_DIVISOR: u64 = 5;

    /// Smallest page size SQLite accepts.
    pub const MIN_PAGE_SIZE: u64 = 512;

    /// Largest page size SQLite accepts.
    pub const MAX_PAGE_SIZE: u64 = 65536;
}

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "logrdr.toml";

/// Only supported config schema version.
pub const VERSION: i64 = 1;
