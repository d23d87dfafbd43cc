//! # Session
//!
//! A `Session` holds one open connection together with the driver name and
//! connection string it was opened with, plus the mapping settings. It is
//! the public entry point for fetching records.
//!
//! ## Operations
//!
//! | Method | Result | Empty result |
//! |--------|--------|--------------|
//! | `fetch_all::<R>` | `Vec<R>` | `vec![]` |
//! | `fetch_one::<R>` | `Option<R>` | `None` |
//! | `fetch_all_as_text::<R>` | JSON array | `"[]"` |
//! | `fetch_one_as_text::<R>` | JSON object | `""` |
//!
//! ## Usage
//!
//! ```ignore
//! #[derive(Debug, Default, serde::Serialize)]
//! struct User { id: i64, name: String }
//! turmap::impl_record!(User { id, name });
//!
//! let session = turmap::open("sqlite", "./app.db")?;
//! let users: Vec<User> = session.fetch_all("SELECT id, name FROM users")?;
//! let json = session.fetch_all_as_text::<User>("SELECT id, name FROM users")?;
//! ```
//!
//! ## Thread Safety
//!
//! `Session` is `Send` but not `Sync`. Calls on one session run one after
//! another; the mapping engine adds no locking of its own.

mod builder;
mod text;

pub use builder::SessionBuilder;

use crate::config::MapperConfig;
use crate::driver::Connection;
use crate::error::{Result, TextError};
use crate::mapping;
use crate::schema::Record;
use serde::Serialize;

pub struct Session {
    connection: Box<dyn Connection>,
    driver: String,
    connection_string: String,
    config: MapperConfig,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("driver", &self.driver)
            .field("connection_string", &self.connection_string)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Wraps an already open connection.
    pub fn from_connection(
        connection: Box<dyn Connection>,
        driver: impl Into<String>,
        connection_string: impl Into<String>,
    ) -> Self {
        Self {
            connection,
            driver: driver.into(),
            connection_string: connection_string.into(),
            config: MapperConfig::default(),
        }
    }

    /// Replaces the mapping settings.
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn driver(&self) -> &str {
        &self.driver
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Borrows the underlying connection, for running queries outside the
    /// mapping engine.
    pub fn connection(&self) -> &dyn Connection {
        self.connection.as_ref()
    }

    /// Consumes the session and returns its connection.
    pub fn into_connection(self) -> Box<dyn Connection> {
        self.connection
    }

    /// Runs `sql` and returns one `R` per row, in row order.
    pub fn fetch_all<R: Record>(&self, sql: &str) -> Result<Vec<R>> {
        mapping::fetch_all(self.connection(), sql, &self.config)
    }

    /// Runs `sql` and returns its first row as an `R`, or `None` when the
    /// query produced no rows.
    pub fn fetch_one<R: Record>(&self, sql: &str) -> Result<Option<R>> {
        mapping::fetch_one(self.connection(), sql, &self.config)
    }

    /// Like `fetch_all`, rendered as a JSON array.
    ///
    /// On failure the error carries `"[]"` as its text.
    pub fn fetch_all_as_text<R: Record + Serialize>(&self, sql: &str) -> Result<String, TextError> {
        text::render_all(self.fetch_all::<R>(sql), self.config.pretty_text)
    }

    /// Like `fetch_one`, rendered as a JSON object, or `""` when there is no
    /// row.
    ///
    /// On failure the error carries `""` as its text.
    pub fn fetch_one_as_text<R: Record + Serialize>(&self, sql: &str) -> Result<String, TextError> {
        text::render_one(self.fetch_one::<R>(sql), self.config.pretty_text)
    }
}
