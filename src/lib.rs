//! # TurMap - Row-to-Record Mapping
//!
//! TurMap executes a SQL query and materializes every returned row into a
//! caller-defined struct. Instead of hand-written per-column scanning code,
//! each record type carries a compile-time descriptor of its fields, and the
//! engine lines the query's columns up against it at run time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use serde::Serialize;
//!
//! #[derive(Debug, Default, Serialize)]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     pub email: Option<String>,
//! }
//!
//! turmap::impl_record!(User { id, name, email => "e_mail" });
//!
//! let session = turmap::open("sqlite", "./app.db")?;
//!
//! let users: Vec<User> = session.fetch_all("SELECT id, name, e_mail FROM users")?;
//! let first: Option<User> = session.fetch_one("SELECT id, name FROM users LIMIT 1")?;
//! let json = session.fetch_all_as_text::<User>("SELECT id, name FROM users")?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Public API (Session, open)       │
//! ├─────────────────────────────────────┤
//! │  Text Rendering (serde_json)         │
//! ├─────────────────────────────────────┤
//! │  Mapping Engine                      │
//! │  resolve → materialize → assemble    │
//! ├───────────────────┬─────────────────┤
//! │ Schema & Catalog  │ Value Types     │
//! ├───────────────────┴─────────────────┤
//! │  Driver Registry / Cursor traits     │
//! ├─────────────────────────────────────┤
//! │  SQLite driver (rusqlite)            │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Column Matching
//!
//! A column matches a field when the column name equals the field's lookup
//! name exactly: the field's `=>` override if one is given, otherwise the
//! field name lower-cased. A column with no matching field fails the call
//! with `MappingError::UnmatchedColumn`; fields with no column keep their
//! `Default` value.
//!
//! ## Module Overview
//!
//! - [`session`]: `Session` and `SessionBuilder`, the fetch operations
//! - [`mapping`]: Column resolution, row materialization, result assembly
//! - [`schema`]: `Record` trait, descriptors, field catalog
//! - [`types`]: `OwnedValue`, `DataType`, `FieldValue` conversions
//! - [`driver`]: `Driver`/`Connection`/`Cursor` traits, registry, SQLite
//! - [`config`]: `MapperConfig` and defaults
//! - [`error`]: `MappingError`, `TextError`

#[macro_use]
mod macros;

pub mod config;
pub mod driver;
pub mod error;
pub mod mapping;
pub mod schema;
pub mod session;
pub mod types;

pub use config::MapperConfig;
pub use driver::{Connection, Cursor, Driver, DriverRegistry, RowSource};
pub use error::{MappingError, Result, TextError};
pub use schema::{DuplicateFieldPolicy, FieldDef, Record, RecordDescriptor};
pub use session::{Session, SessionBuilder};
pub use types::{ConversionError, FieldValue, OwnedValue};

/// Opens a `Session` through the bundled drivers.
///
/// Equivalent to `DriverRegistry::with_defaults().open(driver, connection_string)`.
/// Use a custom `DriverRegistry` to make other drivers available.
pub fn open(driver: &str, connection_string: &str) -> Result<Session> {
    DriverRegistry::with_defaults().open(driver, connection_string)
}
