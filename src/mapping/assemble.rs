//! # Collection Assembly
//!
//! Drives the row materializer over a cursor in one of two modes:
//!
//! - `collect_all`: every row, in cursor order, into a `Vec`
//! - `collect_first`: only the first row, `None` when there is none
//!
//! Neither function owns the cursor; it is released by the connection's
//! query scope they run in.

use super::{materialize_row, ColumnResolution};
use crate::config::MAX_ROW_CAPACITY_HINT;
use crate::driver::Cursor;
use crate::error::{MappingError, Result};
use crate::schema::Record;

/// Materializes every remaining row. `capacity_hint` is clamped to
/// `MAX_ROW_CAPACITY_HINT` before the first allocation.
pub fn collect_all<R: Record>(
    cursor: &mut dyn Cursor,
    resolution: &ColumnResolution,
    capacity_hint: usize,
    sql: &str,
) -> Result<Vec<R>> {
    let mut records = Vec::with_capacity(capacity_hint.min(MAX_ROW_CAPACITY_HINT));

    while let Some(row) = cursor.next_row().map_err(|e| MappingError::query(sql, e))? {
        let row_index = records.len();
        records.push(materialize_row::<R>(row, resolution, row_index)?);
    }

    Ok(records)
}

pub fn collect_first<R: Record>(
    cursor: &mut dyn Cursor,
    resolution: &ColumnResolution,
    sql: &str,
) -> Result<Option<R>> {
    match cursor.next_row().map_err(|e| MappingError::query(sql, e))? {
        Some(row) => materialize_row::<R>(row, resolution, 0).map(Some),
        None => Ok(None),
    }
}
