//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple test modules.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::customer::CustomerDetails;
use crate::database::{Database, DatabaseConfig};
use crate::table::{Capacity, PartySize};

/// Creates a temporary, seeded test database that will be cleaned up
/// automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Builds a calendar date.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a party size.
///
/// # Panics
///
/// Panics if `persons` is zero.
#[must_use]
pub fn party(persons: u32) -> PartySize {
    PartySize::try_from(persons).unwrap()
}

/// Builds a table capacity.
///
/// # Panics
///
/// Panics if `seats` is zero.
#[must_use]
pub fn capacity(seats: u32) -> Capacity {
    Capacity::try_from(seats).unwrap()
}

/// Builds customer details with a derived contact string.
///
/// # Panics
///
/// Panics if `name` is blank.
#[must_use]
pub fn details(name: &str) -> CustomerDetails {
    let contact = format!("{}@example.com", name.to_lowercase());
    CustomerDetails::new(name, contact).unwrap()
}
