// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::pattern::PatternError;

/// Fatal errors that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// A level or message-start pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The input could not be opened or read.
    #[error("{}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Pattern(_) | Error::Config(_) => ExitCode::ConfigError,
            Error::Input { .. } => ExitCode::InputError,
        }
    }
}

/// Failures of the optional record store. Never fatal to classification.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The database path holds something that must not be replaced.
    #[error("refusing to use {} as record store: {reason}", path.display())]
    Refused { path: PathBuf, reason: &'static str },

    /// The store was used before `configure`, or configured twice.
    #[error("store is not ready: {0}")]
    NotReady(&'static str),

    /// A sink declined the record.
    #[error("{0}")]
    Rejected(String),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    ConfigError = 2,
    InputError = 3,
    /// Failure outside the error taxonomy, such as writing the report.
    InternalError = 4,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
