//! Build script for tablebook-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here a second time.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("tablebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage restaurant table reservations")
        .long_about(
            "Command-line tool for booking restaurant tables, one reservation per table per day",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("TABLEBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the lock wait (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("TABLEBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: text, json or csv")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("book")
                .about("Book a table for a party")
                .long_about("Assign the best free table to a party and record the reservation"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Remove a reservation by id, freeing its table for that date"),
            Command::new("upcoming")
                .about("List upcoming reservations")
                .long_about("List reservations from today (or --from) onward, ordered by date"),
            Command::new("add-table")
                .about("Add a table")
                .long_about("Add a table with the given number of seats"),
            Command::new("tables")
                .about("List tables")
                .long_about("List every table with its capacity"),
            Command::new("availability")
                .about("Show free and booked tables for a date")
                .long_about("Show which tables are booked and which are free on one date"),
            Command::new("init")
                .about("Initialize the tablebook data directory and store")
                .long_about("Create the store, seed the default tables and optionally a config file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("tablebook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
