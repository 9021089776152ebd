//! CLI command implementations.
//!
//! - `book`: Book a table for a party
//! - `cancel`: Cancel a reservation by id
//! - `upcoming`: List reservations from a date onward
//! - `add-table`: Add a table to the restaurant
//! - `tables`: List all tables
//! - `availability`: Show free and booked tables for a date
//! - `init`: Initialize the data directory and store
//! - `completions`: Generate shell completion scripts

pub mod add_table;
pub mod availability;
pub mod book;
pub mod cancel;
pub mod completions;
pub mod init;
pub mod tables;
pub mod upcoming;

pub use add_table::AddTableCommand;
pub use availability::AvailabilityCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use tables::TablesCommand;
pub use upcoming::UpcomingCommand;
