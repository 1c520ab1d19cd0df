//! Durable visited-URL store
//!
//! A SQLite-backed set of every URL the crawler has archived. The table is
//! the source of truth across restarts; a write-through in-memory set
//! shortcuts checks for URLs already seen by this process. URLs are compared
//! as exact strings, never normalized, and rows are never updated or
//! deleted.

use crate::store::schema::initialize_schema;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable set of visited URLs
pub struct VisitedStore {
    conn: Connection,
    cache: HashSet<String>,
}

impl VisitedStore {
    /// Opens or creates the store at the given path
    ///
    /// The schema is created if absent; opening an existing database keeps
    /// all previously recorded URLs.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self {
            conn,
            cache: HashSet::new(),
        })
    }

    /// Creates an in-memory store (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn,
            cache: HashSet::new(),
        })
    }

    /// Atomically checks and claims a URL
    ///
    /// Returns `true` iff the URL was not yet recorded; the caller then owns
    /// the fetch for it. Returns `false` if the URL was already recorded,
    /// which is never an error. The check-and-insert is a single
    /// `INSERT OR IGNORE` statement, so two callers can never both claim the
    /// same URL.
    pub fn try_mark_visited(&mut self, url: &str) -> StoreResult<bool> {
        if self.cache.contains(url) {
            return Ok(false);
        }

        let inserted = self
            .conn
            .execute("INSERT OR IGNORE INTO links (url) VALUES (?1)", params![url])?;

        // Write-through: the cache only gains entries the table has
        self.cache.insert(url.to_string());

        Ok(inserted > 0)
    }

    /// Returns whether a URL has been recorded, without claiming it
    pub fn is_visited(&self, url: &str) -> StoreResult<bool> {
        if self.cache.contains(url) {
            return Ok(true);
        }

        let found: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM links WHERE url = ?1", params![url], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(found.is_some())
    }

    /// Number of URLs recorded in the durable table
    pub fn len(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM links", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Returns whether the store holds no URLs
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
