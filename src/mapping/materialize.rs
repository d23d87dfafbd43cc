//! # Row Materialization
//!
//! Builds one record from the row a cursor is positioned on. Each row starts
//! from `R::default()`; columns are written in column order, so when two
//! columns resolve to the same field the later column's value is kept.

use super::ColumnResolution;
use crate::driver::RowSource;
use crate::error::{MappingError, Result};
use crate::schema::Record;

pub fn materialize_row<R: Record>(
    row: &dyn RowSource,
    resolution: &ColumnResolution,
    row_index: usize,
) -> Result<R> {
    let mut record = R::default();

    for (column, name, field) in resolution.iter() {
        let scan_error = |source: crate::error::BoxError| MappingError::RowScan {
            row: row_index,
            column,
            name: name.to_string(),
            source,
        };

        let value = row.value(column).map_err(|e| scan_error(e.into()))?;
        let slot = record.field_mut(field).ok_or_else(|| {
            scan_error(
                eyre::eyre!(
                    "{} does not expose field {} for writing",
                    R::DESCRIPTOR.type_name(),
                    field
                )
                .into(),
            )
        })?;
        slot.assign(value).map_err(|e| scan_error(e.into()))?;
    }

    Ok(record)
}
