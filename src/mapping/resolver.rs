//! # Column Resolution
//!
//! Aligns the columns a query returned with the fields of the record type.
//! Slot `i` of the table always belongs to result column `i`.

use crate::error::{MappingError, Result};
use crate::schema::FieldCatalog;
use smallvec::SmallVec;

/// Result column position → record field position, for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResolution {
    columns: Vec<String>,
    fields: SmallVec<[usize; 16]>,
}

impl ColumnResolution {
    /// Resolves every column against `catalog`, failing on the first column
    /// that has no matching field.
    pub fn resolve(catalog: &FieldCatalog, columns: Vec<String>) -> Result<Self> {
        let mut fields = SmallVec::with_capacity(columns.len());

        for (position, name) in columns.iter().enumerate() {
            match catalog.position(name) {
                Some(field) => fields.push(field),
                None => {
                    return Err(MappingError::UnmatchedColumn {
                        position,
                        name: name.clone(),
                    })
                }
            }
        }

        tracing::trace!(
            record = catalog.type_name(),
            columns = columns.len(),
            "resolved result columns"
        );

        Ok(Self { columns, fields })
    }

    /// Number of result columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field position written by result column `column`.
    pub fn field_for(&self, column: usize) -> Option<usize> {
        self.fields.get(column).copied()
    }

    /// Name the query reported for result column `column`.
    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    /// `(column position, column name, field position)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, usize)> + '_ {
        self.columns
            .iter()
            .zip(self.fields.iter())
            .enumerate()
            .map(|(column, (name, field))| (column, name.as_str(), *field))
    }
}
