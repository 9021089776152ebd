#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablebook
//!
//! A library for managing restaurant table reservations.
//!
//! It records tables, customers and reservations in an embedded SQLite
//! store and assigns each party a free table with enough seats. A table is
//! never booked twice on the same date.
//!
//! ## Core Types
//!
//! - [`Table`], [`Capacity`] and [`PartySize`]: validated seat counts
//! - [`Customer`] and [`Reservation`]: stored records
//! - [`AvailabilityResolver`]: picks a free table for a party
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tablebook::operations::{book_table, BookOptions};
//! use tablebook::{Config, Database, DatabaseConfig};
//!
//! let mut db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
//! let config = Config::default();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! let booked = book_table(&mut db, BookOptions::new("Alice", "555-0100", date, 4), &config)
//!     .unwrap()
//!     .reservation
//!     .unwrap();
//! assert_eq!(booked.table().capacity().value(), 4);
//! ```

pub mod availability;
pub mod config;
pub mod customer;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod reservation;
pub mod table;

// Re-export key types at crate root for convenience
pub use availability::{AvailabilityResolver, TableSelection};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use customer::{Customer, CustomerDetails, CustomerId};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    book_table, remove_reservation, BookOptions, BookPlan, ExecutionResult, OperationPlan,
    PlanAction, PlanExecutor,
};
pub use output::Renderer;
pub use reservation::{seating_time, Reservation, ReservationId, SEATING_HOUR};
pub use table::{Capacity, PartySize, Table, TableId};
