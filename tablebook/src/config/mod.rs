//! Configuration system for tablebook.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`config.yaml` in the data directory)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! From highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TABLEBOOK_*`)
//! 3. User config (`~/.tablebook/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use tablebook::availability::TableSelection;
//! use tablebook::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         table_selection: Some(TableSelection::FirstById),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.selection(), TableSelection::FirstById);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{
    Config, OutputFormat, DEFAULT_LOCK_WAIT_SECONDS,
};
pub use validator::ConfigValidator;
