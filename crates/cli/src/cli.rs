// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Count log messages per severity level
#[derive(Debug, Parser)]
#[command(name = "logrdr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Full path to log file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Store every message in a SQLite database (replaced if it exists)
    #[arg(short = 'd', long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "LOGRDR_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Truncate lines longer than this many bytes (0 = never)
    #[arg(long, value_name = "BYTES")]
    pub max_line_length: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
