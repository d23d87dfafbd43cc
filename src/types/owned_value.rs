//! # Heap-Owned Value Representation
//!
//! This module provides `OwnedValue`, a fully-owned column value. Drivers
//! copy each column out of the current cursor row into an `OwnedValue` so the
//! value can be moved into a record field after the row is gone.
//!
//! ## Conversion
//!
//! ```ignore
//! let v: OwnedValue = 42i64.into();
//! let t: OwnedValue = "alice".into();
//! let n: OwnedValue = Option::<i64>::None.into();
//! assert!(n.is_null());
//! ```

use super::DataType;
use std::fmt;

/// Fully-owned SQL value read from a cursor row.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl OwnedValue {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, OwnedValue::Null)
    }

    /// Returns the storage class of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            OwnedValue::Null => DataType::Null,
            OwnedValue::Bool(_) => DataType::Bool,
            OwnedValue::Int(_) => DataType::Int,
            OwnedValue::Float(_) => DataType::Float,
            OwnedValue::Text(_) => DataType::Text,
            OwnedValue::Blob(_) => DataType::Blob,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OwnedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            OwnedValue::Float(f) => Some(*f),
            OwnedValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OwnedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            OwnedValue::Blob(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for OwnedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnedValue::Null => f.write_str("NULL"),
            OwnedValue::Bool(b) => write!(f, "{}", b),
            OwnedValue::Int(i) => write!(f, "{}", i),
            OwnedValue::Float(v) => write!(f, "{}", v),
            OwnedValue::Text(s) => f.write_str(s),
            OwnedValue::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

impl From<bool> for OwnedValue {
    fn from(v: bool) -> Self {
        OwnedValue::Bool(v)
    }
}

impl From<i64> for OwnedValue {
    fn from(v: i64) -> Self {
        OwnedValue::Int(v)
    }
}

impl From<i32> for OwnedValue {
    fn from(v: i32) -> Self {
        OwnedValue::Int(v as i64)
    }
}

impl From<f64> for OwnedValue {
    fn from(v: f64) -> Self {
        OwnedValue::Float(v)
    }
}

impl From<String> for OwnedValue {
    fn from(v: String) -> Self {
        OwnedValue::Text(v)
    }
}

impl From<&str> for OwnedValue {
    fn from(v: &str) -> Self {
        OwnedValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for OwnedValue {
    fn from(v: Vec<u8>) -> Self {
        OwnedValue::Blob(v)
    }
}

impl<T: Into<OwnedValue>> From<Option<T>> for OwnedValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(OwnedValue::Null)
    }
}

/// Fails on TEXT that is not valid UTF-8; the bytes are never repaired.
impl TryFrom<rusqlite::types::ValueRef<'_>> for OwnedValue {
    type Error = std::str::Utf8Error;

    fn try_from(v: rusqlite::types::ValueRef<'_>) -> Result<Self, Self::Error> {
        use rusqlite::types::ValueRef;
        Ok(match v {
            ValueRef::Null => OwnedValue::Null,
            ValueRef::Integer(i) => OwnedValue::Int(i),
            ValueRef::Real(f) => OwnedValue::Float(f),
            ValueRef::Text(t) => OwnedValue::Text(std::str::from_utf8(t)?.to_string()),
            ValueRef::Blob(b) => OwnedValue::Blob(b.to_vec()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_matches_variant() {
        assert_eq!(OwnedValue::Null.data_type(), DataType::Null);
        assert_eq!(OwnedValue::Int(1).data_type(), DataType::Int);
        assert_eq!(OwnedValue::Text("x".into()).data_type(), DataType::Text);
        assert_eq!(OwnedValue::Blob(vec![1]).data_type(), DataType::Blob);
    }

    #[test]
    fn option_none_becomes_null() {
        let v: OwnedValue = Option::<i64>::None.into();
        assert!(v.is_null());

        let v: OwnedValue = Some("a").into();
        assert_eq!(v, OwnedValue::Text("a".to_string()));
    }

    #[test]
    fn sqlite_value_refs_convert() {
        use rusqlite::types::ValueRef;

        assert_eq!(OwnedValue::try_from(ValueRef::Integer(7)), Ok(OwnedValue::Int(7)));
        assert_eq!(OwnedValue::try_from(ValueRef::Real(1.5)), Ok(OwnedValue::Float(1.5)));
        assert_eq!(
            OwnedValue::try_from(ValueRef::Text(b"hi")),
            Ok(OwnedValue::Text("hi".to_string()))
        );
        assert_eq!(OwnedValue::try_from(ValueRef::Null), Ok(OwnedValue::Null));
    }

    #[test]
    fn invalid_utf8_text_is_rejected() {
        use rusqlite::types::ValueRef;

        let err = OwnedValue::try_from(ValueRef::Text(b"f\xffo")).unwrap_err();
        assert_eq!(err.valid_up_to(), 1);
    }

    #[test]
    fn int_widens_to_float_accessor() {
        assert_eq!(OwnedValue::Int(3).as_float(), Some(3.0));
        assert_eq!(OwnedValue::Text("3".into()).as_float(), None);
    }
}
