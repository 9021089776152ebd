//! Add-table command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, GlobalOptions};
use clap::Args;
use tablebook::operations::add_table;
use tablebook::OutputFormat;

/// Add a table.
#[derive(Args)]
pub struct AddTableCommand {
    /// Number of seats
    #[arg(value_name = "CAPACITY")]
    pub capacity: u32,
}

impl AddTableCommand {
    /// Execute the add-table command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let table = add_table(db.connection(), self.capacity, &config)?;

        match output_format(global, &config) {
            OutputFormat::Text => println!("Added {table}"),
            format => println!("{}", format.renderer().render_tables(&[table])?),
        }
        Ok(())
    }
}
