//! Book command implementation.
//!
//! This module implements the `book` command, which assigns a table to a
//! party and records the reservation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, renderer, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use tablebook::operations::{book_table, BookOptions, BookPlan};

/// Book a table for a party.
#[derive(Args)]
pub struct BookCommand {
    /// Customer name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Customer contact (phone or email)
    #[arg(long, value_name = "CONTACT")]
    pub contact: String,

    /// Date of the visit (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    /// Number of people
    #[arg(long, value_name = "N")]
    pub persons: u32,

    /// Show the table that would be assigned without booking it
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let renderer = renderer(global, &config);

        let options = BookOptions::new(self.name, self.contact, self.date, self.persons)
            .with_dry_run(self.dry_run);

        if global.verbose {
            eprintln!("{}", renderer.render_form(&options)?);
        }

        // A rejected form never creates or opens the store
        BookPlan::new(options.clone(), &config).validate()?;

        let mut db = open_database(global, &config)?;
        let result = book_table(&mut db, options, &config)?;

        if global.verbose {
            for action in &result.actions_taken {
                eprintln!("  - {action}");
            }
        }

        println!("{}", renderer.render_confirmation(&result)?);
        Ok(())
    }
}
