//! # Record Type Descriptors
//!
//! `RecordDescriptor` and `FieldDef` are plain `const`-constructible data, so
//! a record type can expose its shape as an associated constant.
//!
//! ## Hand-written Records
//!
//! ```ignore
//! use turmap::schema::{FieldDef, Record, RecordDescriptor};
//! use turmap::types::FieldValue;
//!
//! #[derive(Default)]
//! struct Account {
//!     id: i64,
//!     email: String,
//! }
//!
//! impl Record for Account {
//!     const DESCRIPTOR: RecordDescriptor = RecordDescriptor::new(
//!         "Account",
//!         &[FieldDef::new("id"), FieldDef::renamed("email", "e_mail")],
//!     );
//!
//!     fn field_mut(&mut self, index: usize) -> Option<&mut dyn FieldValue> {
//!         match index {
//!             0 => Some(&mut self.id),
//!             1 => Some(&mut self.email),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use crate::types::FieldValue;
use std::borrow::Cow;

fn is_override_padding(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// One field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    name: &'static str,
    rename: Option<&'static str>,
}

impl FieldDef {
    pub const fn new(name: &'static str) -> Self {
        Self { name, rename: None }
    }

    pub const fn renamed(name: &'static str, rename: &'static str) -> Self {
        Self {
            name,
            rename: Some(rename),
        }
    }

    pub const fn with_rename(name: &'static str, rename: Option<&'static str>) -> Self {
        Self { name, rename }
    }

    /// Declared field name, as written in the record type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rename(&self) -> Option<&'static str> {
        self.rename
    }

    /// Returns the name this field is matched against column names with.
    ///
    /// A rename that is non-blank after trimming spaces and tabs wins and is
    /// used as-is. Otherwise the declared name is lower-cased.
    pub fn lookup_name(&self) -> Cow<'static, str> {
        match self.rename.map(|r| r.trim_matches(is_override_padding)) {
            Some(rename) if !rename.is_empty() => Cow::Borrowed(rename),
            _ => Cow::Owned(self.name.to_lowercase()),
        }
    }
}

/// Ordered field list of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDescriptor {
    type_name: &'static str,
    fields: &'static [FieldDef],
}

impl RecordDescriptor {
    pub const fn new(type_name: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { type_name, fields }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    pub fn field(&self, index: usize) -> Option<&'static FieldDef> {
        self.fields.get(index)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// A struct that query rows can be materialized into.
///
/// `Default` supplies the zero-initialized instance each row starts from.
/// `field_mut(i)` must return the field described by `DESCRIPTOR.fields()[i]`.
pub trait Record: Default {
    const DESCRIPTOR: RecordDescriptor;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_name_is_lower_cased() {
        assert_eq!(FieldDef::new("UserName").lookup_name(), "username");
        assert_eq!(FieldDef::new("id").lookup_name(), "id");
    }

    #[test]
    fn rename_is_trimmed_but_not_case_folded() {
        let field = FieldDef::renamed("Email", " \tE_Mail\t ");
        assert_eq!(field.lookup_name(), "E_Mail");
    }

    #[test]
    fn blank_rename_falls_back_to_declared_name() {
        assert_eq!(FieldDef::renamed("Email", "").lookup_name(), "email");
        assert_eq!(FieldDef::renamed("Email", " \t ").lookup_name(), "email");
        assert_eq!(FieldDef::with_rename("Email", None).lookup_name(), "email");
    }

    #[test]
    fn only_spaces_and_tabs_are_trimmed() {
        let field = FieldDef::renamed("Email", "\nmail");
        assert_eq!(field.lookup_name(), "\nmail");
    }

    #[test]
    fn descriptor_is_const_constructible() {
        const DESC: RecordDescriptor =
            RecordDescriptor::new("Pair", &[FieldDef::new("a"), FieldDef::new("b")]);

        assert_eq!(DESC.type_name(), "Pair");
        assert_eq!(DESC.field_count(), 2);
        assert_eq!(DESC.field(1).map(FieldDef::name), Some("b"));
        assert!(DESC.field(2).is_none());
    }
}
