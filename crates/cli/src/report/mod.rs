// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run report rendering.
//!
//! Formats the classification summary and elapsed time as text or JSON.

mod json;
mod text;

use crate::classify::Summary;
use crate::cli::OutputFormat;
use crate::timer::Elapsed;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Everything reported at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub summary: Summary,
    pub elapsed: Elapsed,
}

/// Trait for formatting a report into an output format.
pub trait ReportFormatter {
    fn format(&self, report: &Report) -> anyhow::Result<String>;
}

/// Format a report, returning the output string.
pub fn format_report(format: OutputFormat, report: &Report) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
