// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Storage tuning derived from input size and physical memory.
//!
//! The page cache gets at most `1 / memory_divisor` of physical memory and
//! never more pages than the input could fill.

use serde::Serialize;

use crate::config::StoreConfig;

/// Parameters applied to the record store before any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tuning {
    /// Page size in bytes.
    pub page_size: u64,
    /// Cache budget in pages.
    pub cache_pages: u64,
    /// Memory-map size in bytes (the input's size).
    pub mmap_size: u64,
}

impl Tuning {
    /// Compute tuning for an input of `file_size` bytes on a machine with
    /// `total_memory` bytes of physical memory.
    pub fn compute(file_size: u64, total_memory: u64, policy: &StoreConfig) -> Self {
        let page_size = policy.page_size.max(1);
        let memory_pages = total_memory / page_size;
        let file_pages = file_size / page_size;
        let cache_pages = (memory_pages / policy.memory_divisor.max(1)).min(file_pages + 1);
        Self {
            page_size,
            cache_pages,
            mmap_size: file_size,
        }
    }
}

#[cfg(test)]
#[path = "tuning_tests.rs"]
mod tests;
