//! # TurMap Configuration Constants
//!
//! Defaults used by `MapperConfig` and the text rendering of results.
//!
//! ## Text Tokens
//!
//! ```text
//! fetch_all_as_text  ──► JSON array    empty/failed: EMPTY_COLLECTION_TEXT ("[]")
//! fetch_one_as_text  ──► JSON object   empty/failed: EMPTY_RECORD_TEXT     ("")
//! ```
//!
//! A failed text fetch renders the same text as an empty result of the same
//! operation. Callers tell the two apart by the paired error, never by the
//! text alone.

/// Initial capacity of the `Vec` a multi-row fetch collects into.
pub const DEFAULT_ROW_CAPACITY: usize = 100;

/// Upper bound applied to configured capacity hints.
///
/// The hint only sizes the first allocation; larger results still grow.
pub const MAX_ROW_CAPACITY_HINT: usize = 1 << 16;

const _: () = assert!(
    DEFAULT_ROW_CAPACITY <= MAX_ROW_CAPACITY_HINT,
    "DEFAULT_ROW_CAPACITY must not exceed MAX_ROW_CAPACITY_HINT"
);

/// Text of an empty or failed multi-row text fetch.
pub const EMPTY_COLLECTION_TEXT: &str = "[]";

/// Text of an empty or failed first-row text fetch.
pub const EMPTY_RECORD_TEXT: &str = "";

/// Driver used by `SessionBuilder` when none is named.
pub const DEFAULT_DRIVER: &str = "sqlite";
