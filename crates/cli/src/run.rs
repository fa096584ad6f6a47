// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One classification run over a single file.
//!
//! Opens the input, optionally prepares the record store, classifies every
//! line with the timer running, and closes the store on every path. Store
//! problems are logged, reflected in the summary and never fail the run.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::classify::Classifier;
use crate::config::StoreConfig;
use crate::error::{Error, PersistenceError};
use crate::pattern::PatternSet;
use crate::reader::LineSource;
use crate::report::Report;
use crate::store::{LevelRange, SqliteStore};
use crate::system;
use crate::timer::Timer;
use crate::tuning::Tuning;
use crate::verbose::VerboseLogger;

/// Inputs for a run, after CLI and config have been merged.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file: PathBuf,
    /// Database path; `None` disables persistence.
    pub db: Option<PathBuf>,
    pub max_line_length: usize,
    pub store: StoreConfig,
    pub verbose: bool,
}

/// Classify `options.file` and return the report.
pub fn run(options: &RunOptions) -> Result<Report, Error> {
    let verbose = VerboseLogger::new(options.verbose);
    let patterns = PatternSet::standard()?;

    let input_error = |source: std::io::Error| Error::Input {
        path: options.file.clone(),
        source,
    };
    let file = File::open(&options.file).map_err(input_error)?;
    let file_size = file.metadata().map_err(input_error)?.len();

    let mut store_disabled = false;
    let mut store = match &options.db {
        Some(path) => match prepare_store(path, &options.file, file_size, &options.store, &verbose)
        {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("record store disabled: {}", e);
                store_disabled = true;
                None
            }
        },
        None => None,
    };

    let source = LineSource::new(file, options.max_line_length);
    let timer = Timer::start();
    let (outcome, mut summary) = {
        let mut classifier = match store.as_mut() {
            Some(store) => Classifier::with_sink(patterns, store),
            None => Classifier::new(patterns),
        };
        let outcome = classifier.run(source);
        (outcome, classifier.finish())
    };
    let elapsed = timer.stop();

    if let Some(store) = store {
        if let Err(e) = finish_store(store, &verbose) {
            tracing::warn!("record store not committed: {}", e);
            store_disabled = true;
        }
    }
    if store_disabled {
        summary.mark_store_lost();
    }
    outcome.map_err(input_error)?;

    Ok(Report { summary, elapsed })
}

/// Refuse a database path that names the input itself.
fn ensure_distinct(db: &Path, input: &Path) -> Result<(), PersistenceError> {
    let (Ok(db_real), Ok(input_real)) = (fs::canonicalize(db), fs::canonicalize(input)) else {
        return Ok(());
    };
    if db_real == input_real {
        return Err(PersistenceError::Refused {
            path: db.to_path_buf(),
            reason: "it is the input file",
        });
    }
    Ok(())
}

/// Open and configure the store.
fn prepare_store(
    path: &Path,
    input: &Path,
    file_size: u64,
    policy: &StoreConfig,
    verbose: &VerboseLogger,
) -> Result<SqliteStore, PersistenceError> {
    ensure_distinct(path, input)?;
    let tuning = Tuning::compute(file_size, system::total_memory(), policy);
    verbose.section("Store");
    verbose.field("path", path.display());
    verbose.field("page size", tuning.page_size);
    verbose.field("cache pages", tuning.cache_pages);
    verbose.field("mmap size", tuning.mmap_size);

    let mut store = SqliteStore::open(path)?;
    store.configure(&tuning)?;
    Ok(store)
}

/// Commit and close the store. An error means none of the records were kept.
fn finish_store(store: SqliteStore, verbose: &VerboseLogger) -> Result<(), PersistenceError> {
    match store.count(LevelRange::all(), None) {
        Ok(count) => verbose.field("records", count),
        Err(e) => tracing::warn!("failed to count stored records: {}", e),
    }
    store.close()
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
