//! # Mapping Errors
//!
//! Every public operation fails with a `MappingError`. Drivers report their
//! own failures as `eyre::Report`; those are boxed into the `source` of the
//! matching variant so callers can still walk the error chain.
//!
//! ## Taxonomy
//!
//! | Variant | Raised when | Cursor open? |
//! |---------|-------------|--------------|
//! | `UnknownDriver` | driver name not in the registry | no |
//! | `Connection` | driver failed to open the connection | no |
//! | `QueryExecution` | prepare/execute failed, or the cursor failed mid-iteration | no / released |
//! | `ColumnIntrospection` | result column names unavailable | released |
//! | `UnmatchedColumn` | a column has no field in the record type | released |
//! | `RowScan` | a column value could not be read or converted | released |
//! | `DuplicateField` | two fields share a lookup name under the reject policy | no |
//! | `Serialization` | JSON encoding of an assembled result failed | no |
//!
//! None of these are retried. A multi-row fetch never returns partial results.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = MappingError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("unknown driver '{driver}'")]
    UnknownDriver { driver: String },

    #[error("failed to open connection with driver '{driver}'")]
    Connection {
        driver: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to execute query: {sql}")]
    QueryExecution {
        sql: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to read result column names")]
    ColumnIntrospection {
        #[source]
        source: BoxError,
    },

    #[error("No match for column {position}: {name}")]
    UnmatchedColumn { position: usize, name: String },

    #[error("failed to scan column {column} ({name}) of row {row}")]
    RowScan {
        row: usize,
        column: usize,
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("field name '{name}' is declared by fields {first} and {second}")]
    DuplicateField {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("failed to serialize result")]
    Serialization(#[from] serde_json::Error),
}

impl MappingError {
    /// Failure of `driver` to open a connection, for custom `Driver` and
    /// registry code.
    pub fn connection(driver: &str, source: impl Into<BoxError>) -> Self {
        MappingError::Connection {
            driver: driver.to_string(),
            source: source.into(),
        }
    }

    /// Failure to prepare or run `sql`, for custom `Connection` code.
    pub fn query(sql: &str, source: impl Into<BoxError>) -> Self {
        MappingError::QueryExecution {
            sql: sql.to_string(),
            source: source.into(),
        }
    }

    /// True for failures that happened before any query ran.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            MappingError::UnknownDriver { .. } | MappingError::Connection { .. }
        )
    }
}

/// Failure of a text-producing fetch.
///
/// Carries the fallback text the operation renders on failure alongside the
/// underlying error, so a caller always has parseable output in hand.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct TextError {
    text: String,
    #[source]
    source: MappingError,
}

impl TextError {
    pub(crate) fn new(text: impl Into<String>, source: MappingError) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn error(&self) -> &MappingError {
        &self.source
    }

    pub fn into_parts(self) -> (String, MappingError) {
        (self.text, self.source)
    }
}
