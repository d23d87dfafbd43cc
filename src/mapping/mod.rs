//! # Mapping Engine
//!
//! This module turns the rows of one query into records of one type.
//!
//! ## Pipeline
//!
//! ```text
//!   R::DESCRIPTOR ──► FieldCatalog::build          (once per call)
//!                          │
//!   Connection::query(sql) │
//!     └─ cursor scope ─────┼───────────────────────────────────────┐
//!          column_names ──►ColumnResolution::resolve (once per call)│
//!                          │                                        │
//!          next_row ──────►materialize_row           (per row)      │
//!                          │                                        │
//!                          ▼                                        │
//!                 collect_all / collect_first                       │
//!     └─ cursor released ──────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//!
//! Every stage fails the whole call. A failure inside the cursor scope
//! (introspection, resolution, scan, iteration) returns only after the
//! connection has released the cursor. There is no partial result.
//!
//! ## State
//!
//! Catalog, resolution table and results are locals of one call. The engine
//! keeps no state between calls.

mod assemble;
mod materialize;
mod resolver;

pub use assemble::{collect_all, collect_first};
pub use materialize::materialize_row;
pub use resolver::ColumnResolution;

use crate::config::MapperConfig;
use crate::driver::{Connection, Cursor};
use crate::error::{MappingError, Result};
use crate::schema::{FieldCatalog, Record};

/// Runs `sql` and materializes every row as an `R`.
pub fn fetch_all<R: Record>(
    connection: &dyn Connection,
    sql: &str,
    config: &MapperConfig,
) -> Result<Vec<R>> {
    let records = run_scoped::<R, _, _>(connection, sql, config, |cursor, resolution| {
        collect_all::<R>(cursor, resolution, config.row_capacity_hint, sql)
    })?;

    tracing::debug!(
        record = R::DESCRIPTOR.type_name(),
        rows = records.len(),
        "fetched rows"
    );
    Ok(records)
}

/// Runs `sql` and materializes only its first row, if any.
pub fn fetch_one<R: Record>(
    connection: &dyn Connection,
    sql: &str,
    config: &MapperConfig,
) -> Result<Option<R>> {
    let record = run_scoped::<R, _, _>(connection, sql, config, |cursor, resolution| {
        collect_first::<R>(cursor, resolution, sql)
    })?;

    tracing::debug!(
        record = R::DESCRIPTOR.type_name(),
        found = record.is_some(),
        "fetched first row"
    );
    Ok(record)
}

fn run_scoped<R, T, F>(
    connection: &dyn Connection,
    sql: &str,
    config: &MapperConfig,
    mut assemble: F,
) -> Result<T>
where
    R: Record,
    F: FnMut(&mut dyn Cursor, &ColumnResolution) -> Result<T>,
{
    let catalog = FieldCatalog::build(&R::DESCRIPTOR, config.duplicate_fields)?;
    let mut output = None;

    connection.query(sql, &mut |cursor| {
        let columns = cursor
            .column_names()
            .map_err(|e| MappingError::ColumnIntrospection { source: e.into() })?;
        let resolution = ColumnResolution::resolve(&catalog, columns)?;
        output = Some(assemble(cursor, &resolution)?);
        Ok(())
    })?;

    output.ok_or_else(|| {
        MappingError::query(
            sql,
            eyre::eyre!("connection returned without running the cursor scope"),
        )
    })
}
