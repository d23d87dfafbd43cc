//! # Value Types for TurMap
//!
//! This module provides the value model shared by drivers and the mapping
//! engine. Drivers read each column of a row into an `OwnedValue`; the row
//! materializer hands that value to the target field through `FieldValue`.
//!
//! ## Module Structure
//!
//! - `data_type`: `DataType` tag used for diagnostics
//! - `owned_value`: Heap-owned `OwnedValue` read from a cursor
//! - `field_value`: `FieldValue` trait and `ConversionError`
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `DataType` | Storage class of a column value |
//! | `OwnedValue` | Owned column value (outlives the cursor row) |
//! | `FieldValue` | Assigns an `OwnedValue` into a typed record field |
//! | `ConversionError` | Value could not be converted to the field type |
//!
//! ## Usage
//!
//! ```ignore
//! use turmap::types::{FieldValue, OwnedValue};
//!
//! let mut age: i32 = 0;
//! age.assign(OwnedValue::Int(42))?;
//! assert_eq!(age, 42);
//! ```

mod data_type;
mod field_value;
mod owned_value;

pub use data_type::DataType;
pub use field_value::{ConversionError, FieldValue};
pub use owned_value::OwnedValue;
