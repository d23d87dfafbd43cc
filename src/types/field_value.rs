//! # Field Assignment
//!
//! `FieldValue` is the write half of the row materializer: it takes an
//! `OwnedValue` read from a cursor column and stores it into a typed record
//! field, converting where the storage class and the field type differ.
//!
//! ## Conversion Rules
//!
//! | Field type | Accepted storage classes |
//! |------------|--------------------------|
//! | integers | INT (range-checked), BOOL, TEXT (parsed) |
//! | `f32`, `f64` | FLOAT, INT, TEXT (parsed) |
//! | `bool` | BOOL, INT 0/1, TEXT (`1`, `t`, `true`, `0`, `f`, `false`, ...) |
//! | `String` | TEXT, INT, FLOAT, BOOL, BLOB (UTF-8) |
//! | `Vec<u8>` | BLOB, TEXT |
//! | `Option<T>` | NULL becomes `None`, anything else goes through `T` |
//! | `OwnedValue` | anything |
//!
//! NULL is only accepted by `Option<T>` and `OwnedValue` fields.

use super::OwnedValue;
use crate::types::DataType;
use thiserror::Error;

/// A column value could not be stored into a record field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("cannot store NULL into non-nullable {target} field")]
    UnexpectedNull { target: &'static str },

    #[error("cannot convert {found} value to {target}")]
    Incompatible {
        found: DataType,
        target: &'static str,
    },

    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("cannot parse {value:?} as {target}")]
    Parse { value: String, target: &'static str },
}

/// A record field that can be overwritten with a column value.
pub trait FieldValue {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError>;
}

macro_rules! impl_integer_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
                    const TARGET: &str = stringify!($ty);
                    *self = match value {
                        OwnedValue::Int(i) => <$ty>::try_from(i).map_err(|_| {
                            ConversionError::OutOfRange {
                                value: i.to_string(),
                                target: TARGET,
                            }
                        })?,
                        OwnedValue::Bool(b) => <$ty>::from(b),
                        OwnedValue::Text(s) => {
                            s.parse::<$ty>().map_err(|_| ConversionError::Parse {
                                value: s.clone(),
                                target: TARGET,
                            })?
                        }
                        OwnedValue::Null => {
                            return Err(ConversionError::UnexpectedNull { target: TARGET })
                        }
                        other => {
                            return Err(ConversionError::Incompatible {
                                found: other.data_type(),
                                target: TARGET,
                            })
                        }
                    };
                    Ok(())
                }
            }
        )*
    };
}

impl_integer_field!(i8, i16, i32, i64, u8, u16, u32, u64);

impl FieldValue for f64 {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
        *self = match value {
            OwnedValue::Float(f) => f,
            OwnedValue::Int(i) => i as f64,
            OwnedValue::Text(s) => s.parse::<f64>().map_err(|_| ConversionError::Parse {
                value: s.clone(),
                target: "f64",
            })?,
            OwnedValue::Null => return Err(ConversionError::UnexpectedNull { target: "f64" }),
            other => {
                return Err(ConversionError::Incompatible {
                    found: other.data_type(),
                    target: "f64",
                })
            }
        };
        Ok(())
    }
}

impl FieldValue for f32 {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
        let mut wide = 0f64;
        wide.assign(value).map_err(|e| match e {
            ConversionError::UnexpectedNull { .. } => {
                ConversionError::UnexpectedNull { target: "f32" }
            }
            ConversionError::Incompatible { found, .. } => ConversionError::Incompatible {
                found,
                target: "f32",
            },
            ConversionError::OutOfRange { value, .. } => ConversionError::OutOfRange {
                value,
                target: "f32",
            },
            ConversionError::Parse { value, .. } => ConversionError::Parse {
                value,
                target: "f32",
            },
        })?;

        let narrow = wide as f32;
        if wide.is_finite() && narrow.is_infinite() {
            return Err(ConversionError::OutOfRange {
                value: wide.to_string(),
                target: "f32",
            });
        }
        *self = narrow;
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

impl FieldValue for bool {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
        *self = match value {
            OwnedValue::Bool(b) => b,
            OwnedValue::Int(0) => false,
            OwnedValue::Int(1) => true,
            OwnedValue::Int(i) => {
                return Err(ConversionError::OutOfRange {
                    value: i.to_string(),
                    target: "bool",
                })
            }
            OwnedValue::Text(s) => parse_bool(&s).ok_or(ConversionError::Parse {
                value: s.clone(),
                target: "bool",
            })?,
            OwnedValue::Null => return Err(ConversionError::UnexpectedNull { target: "bool" }),
            other => {
                return Err(ConversionError::Incompatible {
                    found: other.data_type(),
                    target: "bool",
                })
            }
        };
        Ok(())
    }
}

impl FieldValue for String {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
        *self = match value {
            OwnedValue::Text(s) => s,
            OwnedValue::Int(i) => i.to_string(),
            OwnedValue::Float(f) => f.to_string(),
            OwnedValue::Bool(b) => b.to_string(),
            OwnedValue::Blob(b) => String::from_utf8(b).map_err(|_| {
                ConversionError::Incompatible {
                    found: DataType::Blob,
                    target: "String",
                }
            })?,
            OwnedValue::Null => {
                return Err(ConversionError::UnexpectedNull { target: "String" })
            }
        };
        Ok(())
    }
}

impl FieldValue for Vec<u8> {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
        *self = match value {
            OwnedValue::Blob(b) => b,
            OwnedValue::Text(s) => s.into_bytes(),
            OwnedValue::Null => {
                return Err(ConversionError::UnexpectedNull { target: "Vec<u8>" })
            }
            other => {
                return Err(ConversionError::Incompatible {
                    found: other.data_type(),
                    target: "Vec<u8>",
                })
            }
        };
        Ok(())
    }
}

impl FieldValue for OwnedValue {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
        *self = value;
        Ok(())
    }
}

impl<T: FieldValue + Default> FieldValue for Option<T> {
    fn assign(&mut self, value: OwnedValue) -> Result<(), ConversionError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        let mut inner = T::default();
        inner.assign(value)?;
        *self = Some(inner);
        Ok(())
    }
}
