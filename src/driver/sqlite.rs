//! # SQLite Driver
//!
//! Bundled driver backed by `rusqlite`. The connection string is a database
//! file path, `:memory:`, or a `file:` URI.
//!
//! ## Cursor Release
//!
//! `SqliteConnection::query` prepares a fresh (uncached) statement for every
//! call. The statement and its `Rows` live on the stack of `query`, so both
//! are dropped when the scope closure returns: `Rows` resets the statement
//! and dropping the `Statement` finalizes it. A failed mapping therefore
//! never leaves a read transaction open on the database.

use super::{Connection, Cursor, CursorScope, Driver, RowSource};
use crate::error::{MappingError, Result};
use crate::types::OwnedValue;
use eyre::WrapErr;
use rusqlite::OpenFlags;

#[derive(Debug, Clone)]
pub struct SqliteDriver {
    flags: OpenFlags,
}

impl Default for SqliteDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SqliteDriver {
    pub fn new() -> Self {
        Self {
            flags: OpenFlags::default(),
        }
    }

    /// Driver that opens databases read-only and never creates them.
    pub fn read_only() -> Self {
        Self {
            flags: OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        }
    }
}

impl Driver for SqliteDriver {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn connect(&self, connection_string: &str) -> eyre::Result<Box<dyn Connection>> {
        let conn = rusqlite::Connection::open_with_flags(connection_string, self.flags)
            .wrap_err_with(|| format!("failed to open sqlite database '{}'", connection_string))?;
        Ok(Box::new(SqliteConnection::new(conn)))
    }
}

/// A `rusqlite::Connection` usable as a mapping `Connection`.
#[derive(Debug)]
pub struct SqliteConnection {
    conn: rusqlite::Connection,
}

impl SqliteConnection {
    pub fn new(conn: rusqlite::Connection) -> Self {
        Self { conn }
    }

    pub fn inner(&self) -> &rusqlite::Connection {
        &self.conn
    }

    pub fn into_inner(self) -> rusqlite::Connection {
        self.conn
    }
}

impl From<rusqlite::Connection> for SqliteConnection {
    fn from(conn: rusqlite::Connection) -> Self {
        Self::new(conn)
    }
}

impl Connection for SqliteConnection {
    fn query(&self, sql: &str, scope: &mut CursorScope<'_>) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| MappingError::query(sql, e))?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let rows = stmt.query([]).map_err(|e| MappingError::query(sql, e))?;

        let mut cursor = SqliteCursor { columns, rows };
        scope(&mut cursor)
    }
}

struct SqliteCursor<'stmt> {
    columns: Vec<String>,
    rows: rusqlite::Rows<'stmt>,
}

impl Cursor for SqliteCursor<'_> {
    fn column_names(&self) -> eyre::Result<Vec<String>> {
        Ok(self.columns.clone())
    }

    fn next_row(&mut self) -> eyre::Result<Option<&dyn RowSource>> {
        let row = self.rows.next()?;
        Ok(row.map(|r| r as &dyn RowSource))
    }
}

impl RowSource for rusqlite::Row<'_> {
    fn value(&self, index: usize) -> eyre::Result<OwnedValue> {
        let value = self
            .get_ref(index)
            .wrap_err_with(|| format!("failed to read column {}", index))?;
        OwnedValue::try_from(value)
            .wrap_err_with(|| format!("column {} holds text that is not valid UTF-8", index))
    }
}
