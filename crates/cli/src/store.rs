// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite record store.
//!
//! Every run starts from a fresh database file. Pragmas are applied before
//! the schema is created, all inserts share one transaction, and the
//! transaction is committed by [`SqliteStore::close`]. Dropping the store
//! without closing it rolls the transaction back.
//!
//! Queries accept an optional regex filter matched case-insensitively
//! against header and body through a `regexp` SQL function.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{ToSql, ValueRef};
use rusqlite::{Connection, params};

use crate::error::PersistenceError;
use crate::level::SeverityLevel;
use crate::sink::{LogRecord, RecordSink};
use crate::tuning::Tuning;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS log (
    ix INTEGER PRIMARY KEY AUTOINCREMENT,
    header TEXT NOT NULL,
    body TEXT,
    level INTEGER NOT NULL
);
"#;

const INSERT_SQL: &str = "INSERT INTO log (header, body, level) VALUES (?1, ?2, ?3)";

/// First bytes of every SQLite 3 database file.
const SQLITE_MAGIC: &[u8; 16] = b"SQLite format 3\0";

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Inclusive range of levels for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub min: SeverityLevel,
    pub max: SeverityLevel,
}

impl LevelRange {
    pub fn new(min: SeverityLevel, max: SeverityLevel) -> Self {
        Self { min, max }
    }

    /// Every level including `Unknown`.
    pub fn all() -> Self {
        Self::new(SeverityLevel::Trace, SeverityLevel::Unknown)
    }
}

impl Default for LevelRange {
    /// The six reportable levels.
    fn default() -> Self {
        Self::new(SeverityLevel::Trace, SeverityLevel::Fatal)
    }
}

/// Paged read of stored records.
#[derive(Debug, Clone)]
pub struct ReadQuery {
    pub limit: usize,
    pub offset: u64,
    /// Newest records first (descending insertion order).
    pub newest_first: bool,
    pub levels: LevelRange,
    /// Regex matched against header or body, ignoring case. Blank means none.
    pub filter: Option<String>,
}

impl Default for ReadQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            newest_first: true,
            levels: LevelRange::default(),
            filter: None,
        }
    }
}

fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.trim().is_empty())
}

/// Register `regexp(pattern, text)`, which backs `text REGEXP pattern`.
///
/// Matching ignores case and lets `.` cross newlines. NULL text never matches.
fn register_regexp(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let regex: Arc<Regex> = ctx.get_or_create_aux(0, |pattern| -> Result<_, BoxError> {
                Ok(Regex::new(&format!("(?is){}", pattern.as_str()?))?)
            })?;
            let is_match = match ctx.get_raw(1) {
                ValueRef::Text(text) => regex.is_match(&String::from_utf8_lossy(text)),
                _ => false,
            };
            Ok(is_match)
        },
    )
}

/// True when `path` holds data that is not a SQLite database.
fn holds_foreign_data(path: &Path) -> Result<bool, PersistenceError> {
    if !path.is_file() {
        return Ok(false);
    }
    let io_error = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut header = Vec::with_capacity(SQLITE_MAGIC.len());
    File::open(path)
        .map_err(io_error)?
        .take(SQLITE_MAGIC.len() as u64)
        .read_to_end(&mut header)
        .map_err(io_error)?;
    Ok(!header.is_empty() && header.as_slice() != SQLITE_MAGIC)
}

/// Record store backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
    configured: bool,
}

impl SqliteStore {
    /// Create a fresh database at `path`, replacing an existing database.
    ///
    /// A non-empty file that is not a SQLite database is left untouched and
    /// the open is refused.
    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        if holds_foreign_data(path)? {
            return Err(PersistenceError::Refused {
                path: path.to_path_buf(),
                reason: "existing file is not a SQLite database",
            });
        }
        if path.exists() {
            fs::remove_file(path).map_err(|source| PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path)?;
        register_regexp(&conn)?;
        tracing::debug!("opened record store at {}", path.display());
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
            configured: false,
        })
    }

    /// Database that lives only as long as the store.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn = Connection::open_in_memory()?;
        register_regexp(&conn)?;
        Ok(Self {
            conn,
            path: None,
            configured: false,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Apply tuning pragmas, create the schema and begin the write transaction.
    pub fn configure(&mut self, tuning: &Tuning) -> Result<(), PersistenceError> {
        if self.configured {
            return Err(PersistenceError::NotReady("already configured"));
        }
        let conn = &self.conn;
        // page_size and encoding only take effect before the first table exists
        conn.pragma_update(None, "page_size", tuning.page_size as i64)?;
        conn.pragma_update(None, "encoding", "UTF-8")?;
        conn.pragma_update(None, "synchronous", "OFF")?;
        conn.pragma_update(None, "journal_mode", "MEMORY")?;
        conn.pragma_update(None, "temp_store", "MEMORY")?;
        conn.pragma_update(None, "cache_size", tuning.cache_pages as i64)?;
        conn.pragma_update(None, "mmap_size", tuning.mmap_size as i64)?;
        tracing::debug!(
            "store tuning: page_size={} cache_pages={} mmap_size={}",
            tuning.page_size,
            tuning.cache_pages,
            tuning.mmap_size
        );

        conn.execute_batch(SCHEMA_SQL)?;
        conn.execute_batch("BEGIN")?;
        self.configured = true;
        Ok(())
    }

    /// Number of stored records whose level is within `levels` and that
    /// match `filter`, if given.
    pub fn count(
        &self,
        levels: LevelRange,
        filter: Option<&str>,
    ) -> Result<u64, PersistenceError> {
        let filter = active_filter(filter);
        let (min, max) = (levels.min.code(), levels.max.code());
        let mut args: Vec<&dyn ToSql> = vec![&min, &max];
        let mut sql = String::from("SELECT count(1) FROM log WHERE level >= ?1 AND level <= ?2");
        if let Some(filter) = &filter {
            sql.push_str(" AND (header REGEXP ?3 OR body REGEXP ?3)");
            args.push(filter);
        }
        let count: i64 = self.conn.query_row(&sql, args.as_slice(), |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Read a page of records in insertion order (or reverse).
    pub fn read(&self, query: &ReadQuery) -> Result<Vec<LogRecord>, PersistenceError> {
        let order = if query.newest_first { "DESC" } else { "ASC" };
        let filter = active_filter(query.filter.as_deref());
        let filter_clause = if filter.is_some() {
            " AND (header REGEXP ?5 OR body REGEXP ?5)"
        } else {
            ""
        };
        let sql = format!(
            "SELECT header, body, level FROM log WHERE level >= ?1 AND level <= ?2{} \
             ORDER BY ix {} LIMIT ?3 OFFSET ?4",
            filter_clause, order
        );
        let (min, max) = (query.levels.min.code(), query.levels.max.code());
        let (limit, offset) = (query.limit as i64, query.offset as i64);
        let mut args: Vec<&dyn ToSql> = vec![&min, &max, &limit, &offset];
        if let Some(filter) = &filter {
            args.push(filter);
        }
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(args.as_slice(), |row| {
            let header: String = row.get(0)?;
            let body: Option<String> = row.get(1)?;
            let code: i64 = row.get(2)?;
            Ok(LogRecord {
                header,
                body: body.unwrap_or_default(),
                level: SeverityLevel::from_code(code).unwrap_or(SeverityLevel::Unknown),
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Commit pending writes and close the connection.
    pub fn close(self) -> Result<(), PersistenceError> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
        }
        self.conn.close().map_err(|(_, e)| PersistenceError::Database(e))
    }
}

impl RecordSink for SqliteStore {
    fn store(&mut self, record: LogRecord) -> Result<(), PersistenceError> {
        if !self.configured {
            return Err(PersistenceError::NotReady("configure must run before store"));
        }
        let body = (!record.body.is_empty()).then_some(record.body.as_str());
        let mut stmt = self.conn.prepare_cached(INSERT_SQL)?;
        stmt.execute(params![record.header, body, record.level.code()])?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
