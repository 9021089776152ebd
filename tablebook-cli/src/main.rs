//! Main entry point for the tablebook CLI.
//!
//! This is the command-line interface for the tablebook reservation manager.
//! It provides commands for booking tables, cancelling reservations and
//! inspecting the restaurant's tables and upcoming visits.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    tablebook::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Upcoming(cmd) => cmd.execute(&global),
        cli::Command::AddTable(cmd) => cmd.execute(&global),
        cli::Command::Tables(cmd) => cmd.execute(&global),
        cli::Command::Availability(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
