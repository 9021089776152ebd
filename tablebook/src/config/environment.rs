//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TABLEBOOK_*` environment variables
//! that override configuration file values.

use std::env;
use std::str::FromStr;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tablebook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any set variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("TABLEBOOK_TABLE_SELECTION") {
            config.table_selection = Some(val.parse()?);
        }

        if let Ok(val) = env::var("TABLEBOOK_MAX_PARTY_SIZE") {
            config.max_party_size = Some(Self::parse_number("TABLEBOOK_MAX_PARTY_SIZE", &val)?);
        }

        if let Ok(val) = env::var("TABLEBOOK_MAX_TABLE_CAPACITY") {
            config.max_table_capacity =
                Some(Self::parse_number("TABLEBOOK_MAX_TABLE_CAPACITY", &val)?);
        }

        if let Ok(val) = env::var("TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds = Some(Self::parse_number(
                "TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
                &val,
            )?);
        }

        // TABLEBOOK_SEED_TABLES (comma-separated capacities)
        if let Ok(val) = env::var("TABLEBOOK_SEED_TABLES") {
            config.seed_tables = Some(Self::parse_seed_tables(&val)?);
        }

        if let Ok(val) = env::var("TABLEBOOK_OUTPUT_FORMAT") {
            config.output_format = Some(OutputFormat::from_str(&val)?);
        }

        Ok(())
    }

    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }

    /// Parse a comma-separated list of capacities such as `2,4,4,6`.
    fn parse_seed_tables(s: &str) -> Result<Vec<u32>> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| Self::parse_number("TABLEBOOK_SEED_TABLES", part))
            .collect()
    }
}
