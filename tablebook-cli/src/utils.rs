//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management and output
//! format selection.

use crate::error::CliError;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;
use tablebook::database::{default_data_dir, DATABASE_FILE_NAME};
use tablebook::{Config, ConfigBuilder, Database, DatabaseConfig, OutputFormat, Renderer};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the lock wait (in seconds).
    pub busy_timeout: Option<u64>,

    /// Override the output format.
    pub format: Option<OutputFormat>,
}

/// Resolve the data directory: `--data-dir` (or `TABLEBOOK_DATA_DIR`),
/// else `~/.tablebook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    default_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `config.yaml` in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the store, creating and seeding it on first use.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);

    let timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), Duration::from_secs);
    let seeds = config
        .seed_capacities()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(timeout)
        .with_seed_tables(seeds);

    Database::open(db_config).map_err(CliError::from)
}

/// The output format: `--format`, else the configured one, else text.
pub fn output_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global
        .format
        .or(config.output_format)
        .unwrap_or_default()
}

/// The renderer for the selected output format.
pub fn renderer(global: &GlobalOptions, config: &Config) -> Box<dyn Renderer> {
    output_format(global, config).renderer()
}

/// Today in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
