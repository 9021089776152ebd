//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use tablebook::operations::remove_reservation;
use tablebook::ReservationId;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: ReservationId,
}

impl CancelCommand {
    /// Execute the cancel command.
    ///
    /// An unknown id is reported but is not a failure.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        if remove_reservation(&mut db, self.id)? {
            if !global.quiet {
                println!("Cancelled reservation #{}", self.id);
            }
        } else if !global.quiet {
            eprintln!("Reservation #{} not found, nothing to cancel", self.id);
        }

        Ok(())
    }
}
