//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution, connection parameters and the table set
//! seeded into a fresh store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::table::Capacity;

use super::schema::DEFAULT_TABLE_CAPACITIES;

/// File name of the store inside the data directory.
pub const DATABASE_FILE_NAME: &str = "tablebook.db";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use tablebook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// // Create a configuration with default settings
/// let config = DatabaseConfig::new("/tmp/tablebook.db");
/// assert_eq!(config.seed_tables.len(), 5);
///
/// // Customize the configuration
/// let config = DatabaseConfig::new("/tmp/tablebook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Capacities inserted the first time an empty store is opened.
    pub seed_tables: Vec<Capacity>,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `seed_tables`: 2, 4, 4, 6, 8
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            seed_tables: default_seed_tables(),
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the database connection will
    /// wait when encountering a locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Replaces the capacities seeded into a fresh store.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::DatabaseConfig;
    /// use tablebook::Capacity;
    ///
    /// let config = DatabaseConfig::new("/tmp/tablebook.db")
    ///     .with_seed_tables(vec![Capacity::try_from(10).unwrap()]);
    /// assert_eq!(config.seed_tables.len(), 1);
    /// ```
    #[must_use]
    pub fn with_seed_tables(mut self, seed_tables: Vec<Capacity>) -> Self {
        self.seed_tables = seed_tables;
        self
    }
}

/// The default table set: one table for two, two for four, one each for
/// six and eight.
#[must_use]
pub fn default_seed_tables() -> Vec<Capacity> {
    DEFAULT_TABLE_CAPACITIES
        .iter()
        .filter_map(|&seats| Capacity::try_from(seats).ok())
        .collect()
}

/// Returns the default data directory for tablebook (`~/.tablebook`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".tablebook"))
}

/// Resolves the database path using environment variables or defaults.
///
/// The resolution order is:
/// 1. `$TABLEBOOK_DATA_DIR/tablebook.db` if the variable is set
/// 2. `~/.tablebook/tablebook.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `TABLEBOOK_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("TABLEBOOK_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join(DATABASE_FILE_NAME))
    } else {
        Ok(default_data_dir()?.join(DATABASE_FILE_NAME))
    }
}
