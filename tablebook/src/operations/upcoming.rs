//! Read-only reservation views.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::availability::{AvailabilityResolver, TableSelection};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::table::{PartySize, Table};

/// Lists reservations dated `today` or later, ordered by date then id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_upcoming(conn: &Connection, today: NaiveDate) -> Result<Vec<Reservation>> {
    Database::list_upcoming_reservations(conn, today)
}

/// Occupancy of a single date: which tables are booked and which are free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    /// The date inspected.
    pub date: NaiveDate,
    /// Reservations on that date, by table id.
    pub booked: Vec<Reservation>,
    /// Tables that can still take the party, in selection order.
    pub free: Vec<Table>,
}

/// Builds the availability view for a date.
///
/// Without a party size every unbooked table is listed.
///
/// # Errors
///
/// Returns a validation error for a zero party size, or a storage error.
pub fn day_availability(
    conn: &Connection,
    date: NaiveDate,
    persons: Option<u32>,
    selection: TableSelection,
) -> Result<DayAvailability> {
    let party_size = match persons {
        Some(n) => PartySize::try_from(n).map_err(|e| Error::Validation {
            field: "persons".into(),
            message: e.reason,
        })?,
        None => PartySize::try_from(1)?,
    };

    let resolver = AvailabilityResolver::new(conn, selection);
    Ok(DayAvailability {
        date,
        booked: Database::list_reservations_on(conn, date)?,
        free: resolver.free_tables(date, party_size)?,
    })
}
