//! Tables command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, renderer, GlobalOptions};
use clap::Args;
use tablebook::operations::list_tables;

/// List tables.
#[derive(Args)]
pub struct TablesCommand {}

impl TablesCommand {
    /// Execute the tables command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let tables = list_tables(db.connection())?;
        println!("{}", renderer(global, &config).render_tables(&tables)?);
        Ok(())
    }
}
