//! # TurMap Configuration Module
//!
//! This module holds the per-session mapping settings and the constants they
//! default to.
//!
//! ## Module Organization
//!
//! - [`constants`]: Default values and text tokens
//!
//! ## Configuration Options
//!
//! | Option             | Default              | Description                                   |
//! |--------------------|----------------------|-----------------------------------------------|
//! | row_capacity_hint  | 100                  | Initial capacity of multi-row results         |
//! | duplicate_fields   | `LastWins`           | Handling of fields sharing a lookup name      |
//! | pretty_text        | false                | Pretty-print JSON from the text operations    |
//!
//! Settings are chosen through `SessionBuilder` and stay fixed for the life
//! of the `Session`.

pub mod constants;
pub use constants::*;

use crate::schema::DuplicateFieldPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Initial capacity of multi-row results, clamped to
    /// `MAX_ROW_CAPACITY_HINT` when the result is allocated.
    pub row_capacity_hint: usize,
    pub duplicate_fields: DuplicateFieldPolicy,
    pub pretty_text: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            row_capacity_hint: DEFAULT_ROW_CAPACITY,
            duplicate_fields: DuplicateFieldPolicy::LastWins,
            pretty_text: false,
        }
    }
}

impl MapperConfig {
    pub fn with_row_capacity_hint(mut self, hint: usize) -> Self {
        self.row_capacity_hint = hint.min(MAX_ROW_CAPACITY_HINT);
        self
    }

    pub fn with_duplicate_fields(mut self, policy: DuplicateFieldPolicy) -> Self {
        self.duplicate_fields = policy;
        self
    }

    pub fn with_pretty_text(mut self, pretty: bool) -> Self {
        self.pretty_text = pretty;
        self
    }
}
