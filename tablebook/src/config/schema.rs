//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from different
//! sources can be merged. The accessor methods on [`Config`] supply the
//! built-in defaults for anything left unset.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::availability::TableSelection;
use crate::database::DEFAULT_TABLE_CAPACITIES;
use crate::error::Result;
use crate::table::Capacity;

/// Lock wait used when `maximum_lock_wait_seconds` is unset.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use tablebook::availability::TableSelection;
/// use tablebook::config::Config;
///
/// let config = Config {
///     table_selection: Some(TableSelection::FirstById),
///     max_party_size: Some(12),
///     ..Default::default()
/// };
/// assert_eq!(config.selection(), TableSelection::FirstById);
/// assert_eq!(config.party_size_limit(), Some(12));
/// assert_eq!(config.table_capacity_limit(), None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Capacities seeded into a fresh store.
    pub seed_tables: Option<Vec<u32>>,

    /// Order in which qualifying tables are assigned.
    pub table_selection: Option<TableSelection>,

    /// Largest party a single booking may hold. Unset means no limit.
    pub max_party_size: Option<u32>,

    /// Largest capacity accepted when adding a table. Unset means no limit.
    pub max_table_capacity: Option<u32>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Table selection order, defaulting to smallest fit.
    #[must_use]
    pub fn selection(&self) -> TableSelection {
        self.table_selection.unwrap_or_default()
    }

    /// Largest accepted party size, if one is configured.
    #[must_use]
    pub const fn party_size_limit(&self) -> Option<u32> {
        self.max_party_size
    }

    /// Largest accepted table capacity, if one is configured.
    #[must_use]
    pub const fn table_capacity_limit(&self) -> Option<u32> {
        self.max_table_capacity
    }

    /// Busy timeout for the store.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// The seed capacities as validated values.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any configured capacity is zero.
    pub fn seed_capacities(&self) -> Result<Vec<Capacity>> {
        let seats: &[u32] = self
            .seed_tables
            .as_deref()
            .unwrap_or(&DEFAULT_TABLE_CAPACITIES);
        seats
            .iter()
            .map(|&value| Capacity::try_from(value).map_err(Into::into))
            .collect()
    }
}

/// Output format for list and confirmation output.
///
/// # Examples
///
/// ```
/// use tablebook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(crate::error::Error::Validation {
                field: "output_format".into(),
                message: format!("unknown format '{other}', expected text, json or csv"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_accessors() {
        let config = Config::default();
        assert_eq!(config.selection(), TableSelection::SmallestFit);
        assert_eq!(config.party_size_limit(), None);
        assert_eq!(config.table_capacity_limit(), None);
        assert_eq!(config.lock_wait(), Duration::from_secs(5));

        let seats: Vec<u32> = config
            .seed_capacities()
            .unwrap()
            .iter()
            .map(|c| c.value())
            .collect();
        assert_eq!(seats, vec![2, 4, 4, 6, 8]);
    }

    #[test]
    fn test_config_yaml_parsing() {
        let yaml = r"
seed_tables: [2, 2, 10]
table_selection: first-by-id
max_party_size: 10
max_table_capacity: 12
maximum_lock_wait_seconds: 3
output_format: csv
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.seed_tables, Some(vec![2, 2, 10]));
        assert_eq!(config.selection(), TableSelection::FirstById);
        assert_eq!(config.party_size_limit(), Some(10));
        assert_eq!(config.table_capacity_limit(), Some(12));
        assert_eq!(config.lock_wait(), Duration::from_secs(3));
        assert_eq!(config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_config_deny_unknown_fields() {
        let yaml = "seating_time: \"19:00\"\n";
        let result: std::result::Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_capacities_rejects_zero() {
        let config = Config {
            seed_tables: Some(vec![4, 0]),
            ..Default::default()
        };
        assert!(config.seed_capacities().unwrap_err().is_validation());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
