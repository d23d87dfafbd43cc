//! # Column Storage Classes
//!
//! `DataType` names the storage class of a value read from a cursor. It
//! mirrors the SQLite storage classes plus an explicit boolean for drivers
//! that report one.
//!
//! | DataType | OwnedValue variant |
//! |----------|--------------------|
//! | Null | `OwnedValue::Null` |
//! | Bool | `OwnedValue::Bool` |
//! | Int | `OwnedValue::Int` |
//! | Float | `OwnedValue::Float` |
//! | Text | `OwnedValue::Text` |
//! | Blob | `OwnedValue::Blob` |

use std::fmt;

/// Storage class of a column value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Null = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    Text = 20,
    Blob = 21,
}

impl DataType {
    /// Returns the SQL-style name of this storage class.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Null => "NULL",
            DataType::Bool => "BOOL",
            DataType::Int => "INT",
            DataType::Float => "FLOAT",
            DataType::Text => "TEXT",
            DataType::Blob => "BLOB",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Bool | DataType::Int | DataType::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_sql_names() {
        assert_eq!(DataType::Int.to_string(), "INT");
        assert_eq!(DataType::Blob.to_string(), "BLOB");
    }

    #[test]
    fn numeric_classes() {
        assert!(DataType::Bool.is_numeric());
        assert!(DataType::Float.is_numeric());
        assert!(!DataType::Text.is_numeric());
        assert!(!DataType::Null.is_numeric());
    }
}
