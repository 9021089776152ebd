//! Store initialization.
//!
//! Creates the data directory and the booking store explicitly, seeding the
//! table set, and optionally writes a commented configuration file.

use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::database::{default_seed_tables, Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};
use crate::table::Capacity;

/// Options for store initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing store.
    pub overwrite: bool,
    /// Write a default configuration file.
    pub create_config: bool,
    /// Capacities of the tables created in the new store.
    pub seed_tables: Vec<Capacity>,
}

impl InitOptions {
    /// Creates initialization options with the default table set.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            seed_tables: default_seed_tables(),
        }
    }

    /// Sets whether to replace an existing store.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write a default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Sets the seed capacities.
    #[must_use]
    pub fn with_seed_tables(mut self, seed_tables: Vec<Capacity>) -> Self {
        self.seed_tables = seed_tables;
        self
    }
}

/// Result of initialization.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the store was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was written.
    pub config_created: bool,
    /// Number of tables in the new store.
    pub tables_seeded: usize,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# tablebook configuration

# Capacities of the tables created when a new store is first opened
# seed_tables: [2, 4, 4, 6, 8]

# Table choice when several fit: smallest-fit or first-by-id
# table_selection: smallest-fit

# Largest party accepted by the booking form (unset: no limit)
# max_party_size: 20

# Largest table that can be added (unset: no limit)
# max_table_capacity: 20

# Seconds to wait for another writer before giving up
# maximum_lock_wait_seconds: 5

# Output of list commands: text, json or csv
# output_format: text
";

/// Initializes the data directory and the booking store.
///
/// # Errors
///
/// Returns an error if the directory or store cannot be created, the
/// configuration file cannot be written, or a store already exists and
/// `overwrite` is not set.
///
/// # Examples
///
/// ```no_run
/// use tablebook::operations::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/tablebook-test"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("{} tables seeded", result.tables_seeded);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        tables_seeded: 0,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "Database already exists at {}. Use --overwrite to replace it.",
                    db_path.display()
                ),
            });
        }
        fs::remove_file(&db_path)?;
        for suffix in ["-wal", "-shm"] {
            let sidecar = options.data_dir.join(format!("{DATABASE_FILE_NAME}{suffix}"));
            if sidecar.exists() {
                fs::remove_file(sidecar)?;
            }
        }
    }

    let db_config = DatabaseConfig::new(&db_path).with_seed_tables(options.seed_tables.clone());
    let db = Database::open(db_config)?;
    result.database_created = true;
    result.tables_seeded = Database::list_tables(db.connection())?.len();
    log::debug!("initialized {} with {} tables", db_path.display(), result.tables_seeded);

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
