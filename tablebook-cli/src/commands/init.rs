//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the tablebook data directory and store.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Parser;
use std::path::PathBuf;
use tablebook::config::CONFIG_FILE_NAME;
use tablebook::database::{default_data_dir, DATABASE_FILE_NAME};
use tablebook::operations::{init_database, InitOptions};

/// Initialize the tablebook data directory and store.
#[derive(Parser)]
#[command(about = "Initialize the tablebook data directory and store")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Overwrite an existing store
    #[arg(long)]
    overwrite: bool,

    /// Create a default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--dir` names where to create the store; it falls back to the
    /// global `--data-dir` and then to `~/.tablebook`.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = self
            .dir
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not determine data directory (home directory not found)".to_string(),
                )
            })?;

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize tablebook in: {}", data_dir.display());

            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }

            let db_path = data_dir.join(DATABASE_FILE_NAME);
            if !db_path.exists() {
                println!("  - Create store: {}", db_path.display());
            } else if self.overwrite {
                println!("  - Remove existing store: {}", db_path.display());
                println!("  - Create new store: {}", db_path.display());
            } else {
                println!(
                    "  - ERROR: Store already exists (use --overwrite to replace): {}",
                    db_path.display()
                );
            }

            if self.with_config {
                let config_path = data_dir.join(CONFIG_FILE_NAME);
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }

            return Ok(());
        }

        let scoped = GlobalOptions {
            data_dir: Some(data_dir.clone()),
            ..global.clone()
        };
        let seeds = load_configuration(&scoped)?
            .seed_capacities()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_seed_tables(seeds);

        let result = init_database(&options)?;

        if global.quiet {
            return Ok(());
        }

        println!("Initialized tablebook in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated store");
            } else {
                println!("  - Created store");
            }
            println!("  - Seeded {} tables", result.tables_seeded);
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
