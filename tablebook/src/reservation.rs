//! Reservation types.
//!
//! A reservation binds one customer to one table on one calendar day.
//! Reservations are immutable once stored; the only way to change one is
//! to remove it and book again.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::customer::Customer;
use crate::table::{PartySize, Table};

/// Hour of the single daily sitting every reservation is booked for.
pub const SEATING_HOUR: u32 = 18;

/// Time of the single daily sitting.
///
/// Conflicts are detected per date only, so a table is taken for the whole
/// evening once it is booked.
#[must_use]
pub fn seating_time() -> NaiveTime {
    NaiveTime::from_hms_opt(SEATING_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Storage-assigned identity of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReservationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A stored reservation with its table and customer attached.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::{
///     Capacity, Customer, CustomerDetails, CustomerId, PartySize, Reservation,
///     ReservationId, Table, TableId,
/// };
///
/// let table = Table::new(TableId::new(2), Capacity::try_from(4).unwrap());
/// let customer = Customer::new(
///     CustomerId::new(1),
///     CustomerDetails::new("Alice", "a@x.com").unwrap(),
/// );
/// let reservation = Reservation::new(
///     ReservationId::new(1),
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     PartySize::try_from(3).unwrap(),
///     table,
///     customer,
/// );
///
/// assert_eq!(reservation.table().id(), TableId::new(2));
/// assert_eq!(reservation.spare_seats(), 1);
/// assert_eq!(reservation.seating_time().to_string(), "18:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: ReservationId,
    date: NaiveDate,
    party_size: PartySize,
    table: Table,
    customer: Customer,
}

impl Reservation {
    /// Creates a reservation record from its stored parts.
    ///
    /// The party size is not checked against the table capacity here; the
    /// booking workflow guarantees it for every reservation it creates.
    #[must_use]
    pub const fn new(
        id: ReservationId,
        date: NaiveDate,
        party_size: PartySize,
        table: Table,
        customer: Customer,
    ) -> Self {
        Self {
            id,
            date,
            party_size,
            table,
            customer,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the booked date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the number of people.
    #[must_use]
    pub const fn party_size(&self) -> PartySize {
        self.party_size
    }

    /// Returns the assigned table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the customer who booked.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Returns the sitting time, identical for every reservation.
    #[must_use]
    pub fn seating_time(&self) -> NaiveTime {
        seating_time()
    }

    /// Seats at the assigned table left empty by this party.
    #[must_use]
    pub const fn spare_seats(&self) -> u32 {
        self.table.capacity().spare_seats(self.party_size)
    }

    /// Returns `true` if the reservation is on or after the given day.
    #[must_use]
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reservation #{} on {} at {}: {} person(s), {}, {}",
            self.id,
            self.date,
            seating_time().format("%H:%M"),
            self.party_size,
            self.table,
            self.customer.name()
        )
    }
}
