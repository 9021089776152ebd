//! Availability command implementation.
//!
//! Shows which tables are booked and which are still free on one date,
//! optionally only those large enough for a party.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, renderer, today, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use tablebook::operations::day_availability;

/// Show free and booked tables for a date.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Date to inspect (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Only list free tables that seat this many people
    #[arg(long, value_name = "N")]
    pub persons: Option<u32>,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let date = self.date.unwrap_or_else(today);
        let view = day_availability(db.connection(), date, self.persons, config.selection())?;

        println!("{}", renderer(global, &config).render_availability(&view)?);
        Ok(())
    }
}
