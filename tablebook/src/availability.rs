//! Table availability resolution.
//!
//! A table is available for a party on a date when it has enough seats and
//! no reservation on that date. Nothing is cached: every question goes
//! straight to the store, so answers always reflect the latest bookings.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::table::{PartySize, Table};

#[cfg(test)]
mod proptests;

/// Order in which qualifying tables are considered.
///
/// # Examples
///
/// ```
/// use tablebook::availability::TableSelection;
///
/// let selection: TableSelection = "first-by-id".parse().unwrap();
/// assert_eq!(selection, TableSelection::FirstById);
/// assert_eq!(TableSelection::default(), TableSelection::SmallestFit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableSelection {
    /// Smallest sufficient capacity first, ties broken by ascending id.
    #[default]
    SmallestFit,
    /// Ascending id regardless of capacity.
    FirstById,
}

impl TableSelection {
    /// All selection orders, for help text and completions.
    pub const ALL: [Self; 2] = [Self::SmallestFit, Self::FirstById];

    /// The `ORDER BY` clause implementing this selection.
    #[must_use]
    pub const fn order_by(self) -> &'static str {
        match self {
            Self::SmallestFit => "capacity ASC, id ASC",
            Self::FirstById => "id ASC",
        }
    }

    /// The configuration spelling of this selection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmallestFit => "smallest-fit",
            Self::FirstById => "first-by-id",
        }
    }
}

impl fmt::Display for TableSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|selection| selection.as_str() == s.trim())
            .ok_or_else(|| Error::Validation {
                field: "table_selection".into(),
                message: format!("unknown selection '{s}', expected smallest-fit or first-by-id"),
            })
    }
}

/// Stateless availability resolver over a connection.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::availability::{AvailabilityResolver, TableSelection};
/// use tablebook::database::{Database, DatabaseConfig};
/// use tablebook::PartySize;
///
/// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
/// let resolver = AvailabilityResolver::new(db.connection(), TableSelection::SmallestFit);
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let table = resolver.find_table(date, PartySize::try_from(7).unwrap()).unwrap();
/// assert_eq!(table.unwrap().capacity().value(), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityResolver<'a> {
    conn: &'a Connection,
    selection: TableSelection,
}

impl<'a> AvailabilityResolver<'a> {
    /// Creates a resolver reading from `conn`.
    #[must_use]
    pub const fn new(conn: &'a Connection, selection: TableSelection) -> Self {
        Self { conn, selection }
    }

    /// Returns the selection order in use.
    #[must_use]
    pub const fn selection(&self) -> TableSelection {
        self.selection
    }

    /// Finds the first qualifying table, or `None` when every table is
    /// too small or already booked on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub fn find_table(&self, date: NaiveDate, party_size: PartySize) -> Result<Option<Table>> {
        let table = Database::find_available_table(self.conn, date, party_size, self.selection)?;
        match &table {
            Some(table) => log::debug!(
                "{} selected {table} for {party_size} on {date}",
                self.selection
            ),
            None => log::debug!("no table for {party_size} on {date}"),
        }
        Ok(table)
    }

    /// Lists every qualifying table in selection order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub fn free_tables(&self, date: NaiveDate, party_size: PartySize) -> Result<Vec<Table>> {
        Database::list_free_tables(self.conn, date, party_size, self.selection)
    }

    /// Returns `true` if `table` has no reservation on `date`.
    ///
    /// Capacity is not considered.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub fn is_table_free(&self, table: &Table, date: NaiveDate) -> Result<bool> {
        Ok(!Database::is_table_booked(self.conn, table.id(), date)?)
    }
}
