//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the logrdr binary.
///
/// Config and log filter variables from the caller's environment are removed.
pub fn logrdr_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("logrdr"));
    cmd.env_remove("LOGRDR_CONFIG").env_remove("LOGRDR_LOG");
    cmd
}

/// A temp directory with a `.git` marker so config discovery stops here.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a log file with one line per entry and return its path.
    pub fn log(&self, name: &str, lines: &[&str]) -> PathBuf {
        let mut content = lines.join("\n");
        content.push('\n');
        self.file(name, &content)
    }

    /// Write `content` verbatim.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn config(&self, content: &str) {
        self.file("logrdr.toml", content);
    }
}

/// The canonical two-message sample.
pub const SAMPLE: &[&str] = &[
    "2024-01-01 00:00:00 INFO start",
    "more detail",
    "2024-01-01 00:00:01 ERROR fail",
];
