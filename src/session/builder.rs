//! # Session Builder
//!
//! Fluent configuration for opening a `Session`.
//!
//! ## Configuration Options
//!
//! | Option             | Default                          |
//! |--------------------|----------------------------------|
//! | registry           | `DriverRegistry::with_defaults()`|
//! | driver             | `"sqlite"`                       |
//! | connect            | required                         |
//! | row_capacity_hint  | 100                              |
//! | duplicate_fields   | `LastWins`                       |
//! | pretty_text        | false                            |
//!
//! ## Usage Examples
//!
//! ```ignore
//! let session = Session::builder()
//!     .driver("sqlite")
//!     .connect("./app.db")
//!     .duplicate_fields(DuplicateFieldPolicy::Reject)
//!     .open()?;
//! ```

use super::Session;
use crate::config::{MapperConfig, DEFAULT_DRIVER};
use crate::driver::DriverRegistry;
use crate::error::{MappingError, Result};
use crate::schema::DuplicateFieldPolicy;

#[derive(Debug, Default)]
pub struct SessionBuilder {
    registry: Option<DriverRegistry>,
    driver: Option<String>,
    connection_string: Option<String>,
    config: MapperConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `registry` instead of the default driver set.
    pub fn registry(mut self, registry: DriverRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    pub fn connect(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    pub fn row_capacity_hint(mut self, hint: usize) -> Self {
        self.config = self.config.with_row_capacity_hint(hint);
        self
    }

    pub fn duplicate_fields(mut self, policy: DuplicateFieldPolicy) -> Self {
        self.config = self.config.with_duplicate_fields(policy);
        self
    }

    pub fn pretty_text(mut self, pretty: bool) -> Self {
        self.config = self.config.with_pretty_text(pretty);
        self
    }

    pub fn config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens the connection and returns the configured `Session`.
    pub fn open(self) -> Result<Session> {
        let driver = self.driver.unwrap_or_else(|| DEFAULT_DRIVER.to_string());
        let connection_string = self.connection_string.ok_or_else(|| {
            MappingError::connection(&driver, eyre::eyre!("no connection string configured"))
        })?;
        let registry = self.registry.unwrap_or_else(DriverRegistry::with_defaults);

        let connection = registry.connect(&driver, &connection_string)?;
        Ok(Session::from_connection(connection, driver, connection_string).with_config(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sqlite_driver() {
        let session = SessionBuilder::new().connect(":memory:").open().unwrap();
        assert_eq!(session.driver(), "sqlite");
        assert_eq!(session.config(), &MapperConfig::default());
    }

    #[test]
    fn missing_connection_string_is_a_connection_error() {
        let err = SessionBuilder::new().driver("sqlite").open().unwrap_err();
        assert!(err.is_connection_error());
    }

    #[test]
    fn settings_reach_the_session() {
        let session = Session::builder()
            .connect(":memory:")
            .row_capacity_hint(4)
            .duplicate_fields(DuplicateFieldPolicy::Reject)
            .pretty_text(true)
            .open()
            .unwrap();

        let config = session.config();
        assert_eq!(config.row_capacity_hint, 4);
        assert_eq!(config.duplicate_fields, DuplicateFieldPolicy::Reject);
        assert!(config.pretty_text);
    }

    #[test]
    fn custom_registry_without_sqlite_rejects_it() {
        let err = Session::builder()
            .registry(DriverRegistry::new())
            .connect(":memory:")
            .open()
            .unwrap_err();
        assert!(matches!(err, MappingError::UnknownDriver { ref driver } if driver == "sqlite"));
    }
}
