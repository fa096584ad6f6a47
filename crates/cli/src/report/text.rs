// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use crate::level::SeverityLevel;

use super::{Report, ReportFormatter};

/// Text format report formatter.
///
/// ```text
/// Messages: 2 Time 00:00:01
/// T:0 D:0 I:1 W:0 E:1 F:0
/// ```
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> anyhow::Result<String> {
        let counters = &report.summary.counters;
        let mut out = String::with_capacity(96);

        writeln!(out, "Messages: {} Time {}", counters.total(), report.elapsed)?;
        let levels: Vec<String> = SeverityLevel::ALL
            .iter()
            .map(|level| format!("{}:{}", level.tag(), counters.get(*level)))
            .collect();
        writeln!(out, "{}", levels.join(" "))?;

        if counters.unknown() > 0 {
            writeln!(out, "Unknown: {}", counters.unknown())?;
        }
        Ok(out)
    }
}
