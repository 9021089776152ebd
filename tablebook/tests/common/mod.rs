//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the tablebook library.

use chrono::NaiveDate;
use tablebook::operations::{book_table, BookOptions};
use tablebook::{Config, Database, DatabaseConfig, Reservation, Result};

/// Creates a seeded test database in a temporary location.
///
/// The temporary directory is leaked so it outlives the database handle.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tablebook.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Builds a calendar date.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Books a table with a derived contact and the default configuration.
#[allow(dead_code)]
pub fn book(db: &mut Database, name: &str, on: NaiveDate, persons: u32) -> Result<Reservation> {
    let contact = format!("{}@example.com", name.to_lowercase());
    let result = book_table(
        db,
        BookOptions::new(name, contact, on, persons),
        &Config::default(),
    )?;
    Ok(result.reservation.unwrap())
}
