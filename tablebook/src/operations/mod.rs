//! Booking operations using the plan-execute pattern.
//!
//! Planning validates a request and resolves a table; execution writes the
//! planned rows. Keeping the two apart gives dry-run mode for free and
//! lets the booking run inside one transaction.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: validates the request and resolves a table
//! 2. **Execution**: creates the customer and the reservation
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tablebook::config::Config;
//! use tablebook::database::{Database, DatabaseConfig};
//! use tablebook::operations::{BookOptions, BookPlan, PlanExecutor};
//!
//! let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
//! let config = Config::default();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! let options = BookOptions::new("Alice", "alice@example.com", date, 4);
//!
//! // Generate plan
//! let plan = BookPlan::new(options, &config).build_plan(db.connection()).unwrap();
//!
//! // Execute plan
//! let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
//! assert!(result.reservation.is_some());
//! ```

pub mod book;
pub mod cancel;
pub mod executor;
pub mod init;
pub mod plan;
pub mod tables;
pub mod upcoming;

#[cfg(test)]
mod proptests;

pub use book::{book_table, BookOptions, BookPlan, BookingRequest};
pub use cancel::remove_reservation;
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use tables::{add_table, list_tables, plan_add_table};
pub use upcoming::{day_availability, list_upcoming, DayAvailability};
