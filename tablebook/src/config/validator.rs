//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_party_size: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref seats) = config.seed_tables {
            Self::validate_seed_tables(seats, config.table_capacity_limit())?;
        }

        Self::validate_positive("max_party_size", config.max_party_size.map(u64::from))?;
        Self::validate_positive(
            "max_table_capacity",
            config.max_table_capacity.map(u64::from),
        )?;

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_positive(field: &str, value: Option<u64>) -> Result<()> {
        if value == Some(0) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must be greater than 0".into(),
            });
        }
        Ok(())
    }

    fn validate_seed_tables(seats: &[u32], limit: Option<u32>) -> Result<()> {
        for (index, &capacity) in seats.iter().enumerate() {
            if capacity == 0 {
                return Err(Error::Validation {
                    field: format!("seed_tables[{index}]"),
                    message: "Capacity must be at least 1".into(),
                });
            }
            if let Some(limit) = limit.filter(|&limit| capacity > limit) {
                return Err(Error::Validation {
                    field: format!("seed_tables[{index}]"),
                    message: format!("Capacity {capacity} exceeds max_table_capacity {limit}"),
                });
            }
        }
        Ok(())
    }
}
