//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddTableCommand, AvailabilityCommand, BookCommand, CancelCommand, CompletionsCommand,
    InitCommand, TablesCommand, UpcomingCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tablebook::OutputFormat;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TABLEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the lock wait (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "TABLEBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Output format: text, json or csv
    #[arg(long, value_name = "FORMAT", global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a table for a party
    Book(BookCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List upcoming reservations
    Upcoming(UpcomingCommand),

    /// Add a table
    AddTable(AddTableCommand),

    /// List tables
    Tables(TablesCommand),

    /// Show free and booked tables for a date
    Availability(AvailabilityCommand),

    /// Initialize the data directory and store
    Init(InitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: tablebook::Error| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_book() {
        let cli = Cli::try_parse_from([
            "tablebook",
            "--format",
            "json",
            "book",
            "--name",
            "Alice",
            "--contact",
            "555",
            "--date",
            "2024-06-01",
            "--persons",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::Book(_)));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["tablebook", "--format", "xml", "tables"]).is_err());
    }
}
