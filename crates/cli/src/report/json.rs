// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::{Report, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> anyhow::Result<String> {
        let summary = &report.summary;
        let output = json!({
            "messages": summary.counters.total(),
            "elapsed": report.elapsed,
            "levels": summary.counters,
            "unknown": summary.counters.unknown(),
            "lines": summary.lines,
            "truncated_lines": summary.truncated_lines,
            "orphan_lines": summary.orphan_lines,
            "stored": summary.stored,
            "persistence_failures": summary.persistence_failures,
            "store_disabled": summary.store_disabled,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
