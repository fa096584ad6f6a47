// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host memory lookup.

use sysinfo::System;

/// Total physical memory in bytes.
pub fn total_memory() -> u64 {
    let mut system = System::new();
    system.refresh_memory();
    system.total_memory()
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
