//! # Record Schemas
//!
//! This module describes the shape of caller-defined record types and turns
//! that shape into the lookup table the column resolver matches against.
//!
//! ## Overview
//!
//! A record type implements [`Record`], which carries a `const`
//! [`RecordDescriptor`]: the type name plus an ordered list of [`FieldDef`]s.
//! The descriptor is fixed at compile time, usually generated by the
//! [`impl_record!`](crate::impl_record) macro, so no run-time reflection is
//! involved.
//!
//! ```text
//! struct User { id, name, email => "e_mail" }
//!         │
//!         ▼
//! RecordDescriptor [ id, name, email(rename "e_mail") ]
//!         │  FieldCatalog::build
//!         ▼
//! FieldCatalog { "id" → 0, "name" → 1, "e_mail" → 2 }
//! ```
//!
//! ## Name Resolution
//!
//! Each field's lookup name is:
//! 1. Its rename, trimmed of spaces and tabs, used verbatim when non-blank
//! 2. Otherwise its declared name, lower-cased
//!
//! Lookups are case-sensitive after this normalization.

mod catalog;
mod record;

pub use catalog::{DuplicateFieldPolicy, FieldCatalog};
pub use record::{FieldDef, Record, RecordDescriptor};
