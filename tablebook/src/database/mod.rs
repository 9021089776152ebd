//! Database layer for persistent storage of tables, customers and
//! reservations.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, first-run seeding, and the queries the
//! booking workflow is built on.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tablebook::availability::TableSelection;
//! use tablebook::database::{Database, DatabaseConfig};
//! use tablebook::{CustomerDetails, PartySize};
//!
//! // Open a store (seeded with tables of 2, 4, 4, 6 and 8 seats)
//! let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
//! let conn = db.connection();
//!
//! // Find a table and book it
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let party = PartySize::try_from(2).unwrap();
//! let table = Database::find_available_table(conn, date, party, TableSelection::SmallestFit)
//!     .unwrap()
//!     .unwrap();
//! let customer =
//!     Database::create_customer(conn, &CustomerDetails::new("Ann", "555-0101").unwrap()).unwrap();
//! Database::create_reservation(conn, date, party, table.id(), customer.id()).unwrap();
//!
//! // List what is coming up
//! for reservation in Database::list_upcoming_reservations(conn, date).unwrap() {
//!     println!("{reservation}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, default_seed_tables, resolve_database_path, DatabaseConfig,
    DATABASE_FILE_NAME,
};
pub use connection::Database;
pub use schema::{CURRENT_SCHEMA_VERSION, DEFAULT_TABLE_CAPACITIES};

// Re-export migration functions for advanced use cases
pub use migrations::{
    check_schema_compatibility, get_schema_version, initialize_schema, seed_default_tables,
};

pub(crate) use transaction::map_busy;
