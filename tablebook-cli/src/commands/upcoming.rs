//! Upcoming command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, renderer, today, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use tablebook::operations::list_upcoming;

/// List upcoming reservations.
#[derive(Args)]
pub struct UpcomingCommand {
    /// First date to include (default: today)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,
}

impl UpcomingCommand {
    /// Execute the upcoming command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let from = self.from.unwrap_or_else(today);
        let reservations = list_upcoming(db.connection(), from)?;

        println!("{}", renderer(global, &config).render_list(&reservations)?);
        Ok(())
    }
}
