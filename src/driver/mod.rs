//! # Drivers and Cursors
//!
//! This module defines the seam between the mapping engine and a SQL client.
//! The engine only needs three capabilities from a client: open a
//! connection, run a query inside a cursor scope, and read column values of
//! the current row.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ DriverRegistry   name → Arc<dyn Driver>  │
//! ├──────────────────────────────────────────┤
//! │ Driver::connect(conn_str)                │
//! │        │                                 │
//! │        ▼                                 │
//! │ Box<dyn Connection>                      │
//! │        │ query(sql, scope)               │
//! │        ▼                                 │
//! │ &mut dyn Cursor  (valid inside scope)    │
//! │        │ next_row()                      │
//! │        ▼                                 │
//! │ &dyn RowSource   (valid until next_row)  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Cursor Lifetime
//!
//! `Connection::query` never returns a cursor. It lends one to the `scope`
//! closure and releases it once the closure returns, whatever the closure
//! returned. Server-side query resources therefore cannot leak past the call,
//! even when resolution or materialization fails halfway through.
//!
//! ## Registration
//!
//! There is no global driver table. A `DriverRegistry` value is built by the
//! application (or taken from `DriverRegistry::with_defaults()`) and passed to
//! `open`.

pub mod sqlite;

use crate::error::{MappingError, Result};
use crate::session::Session;
use crate::types::OwnedValue;
use hashbrown::HashMap;
use std::sync::Arc;

pub use sqlite::{SqliteConnection, SqliteDriver};

/// Values of the row a cursor is positioned on.
pub trait RowSource {
    fn value(&self, index: usize) -> eyre::Result<OwnedValue>;
}

/// A live, forward-only handle to a query's result rows.
pub trait Cursor {
    /// Column names in result order.
    fn column_names(&self) -> eyre::Result<Vec<String>>;

    /// Advances to the next row. `None` means the result set is exhausted.
    fn next_row(&mut self) -> eyre::Result<Option<&dyn RowSource>>;
}

/// Scope closure a connection lends its cursor to.
pub type CursorScope<'a> = dyn FnMut(&mut dyn Cursor) -> Result<()> + 'a;

/// An open database connection.
pub trait Connection: Send {
    /// Executes `sql` and runs `scope` with a cursor over its rows.
    ///
    /// Preparation and execution failures are reported as
    /// `MappingError::QueryExecution` without calling `scope`. Otherwise the
    /// result of `scope` is returned after the cursor has been released.
    fn query(&self, sql: &str, scope: &mut CursorScope<'_>) -> Result<()>;
}

/// Opens connections for one driver identity.
pub trait Driver: Send + Sync {
    fn name(&self) -> &str;

    fn connect(&self, connection_string: &str) -> eyre::Result<Box<dyn Connection>>;
}

/// Explicit table of available drivers, keyed by driver name.
#[derive(Clone, Default)]
pub struct DriverRegistry {
    drivers: HashMap<String, Arc<dyn Driver>>,
}

impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("drivers", &self.driver_names())
            .finish()
    }
}

impl DriverRegistry {
    /// Creates a registry with no drivers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the bundled SQLite driver under `sqlite` and
    /// `sqlite3`.
    pub fn with_defaults() -> Self {
        let sqlite: Arc<dyn Driver> = Arc::new(SqliteDriver::new());
        let mut registry = Self::new();
        registry.register_as("sqlite", Arc::clone(&sqlite));
        registry.register_as("sqlite3", sqlite);
        registry
    }

    /// Registers `driver` under its own name, replacing any previous entry.
    pub fn register<D: Driver + 'static>(&mut self, driver: D) -> &mut Self {
        let name = driver.name().to_string();
        self.register_as(name, Arc::new(driver))
    }

    pub fn register_as(&mut self, name: impl Into<String>, driver: Arc<dyn Driver>) -> &mut Self {
        self.drivers.insert(name.into(), driver);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Driver>> {
        self.drivers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Registered driver names, sorted.
    pub fn driver_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.drivers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Opens a raw connection through the named driver.
    pub fn connect(&self, driver: &str, connection_string: &str) -> Result<Box<dyn Connection>> {
        let handle = self
            .get(driver)
            .ok_or_else(|| MappingError::UnknownDriver {
                driver: driver.to_string(),
            })?;

        tracing::debug!(driver, "opening connection");
        handle
            .connect(connection_string)
            .map_err(|e| MappingError::connection(driver, e))
    }

    /// Opens a `Session` through the named driver with default settings.
    pub fn open(&self, driver: &str, connection_string: &str) -> Result<Session> {
        let connection = self.connect(driver, connection_string)?;
        Ok(Session::from_connection(connection, driver, connection_string))
    }
}
