//! Table types: identities, seat counts and party sizes.
//!
//! Seat counts and party sizes share the same rule (a positive integer), so
//! both are validated newtypes built through `TryFrom<u32>`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned identity of a table.
///
/// # Examples
///
/// ```
/// use tablebook::TableId;
///
/// let id = TableId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(i64);

impl TableId {
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

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for zero seat counts and party sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCountError {
    /// Which count was rejected (`capacity` or `persons`).
    pub field: &'static str,
    /// The rejected value.
    pub value: u32,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} {}: {}", self.field, self.value, self.reason)
    }
}

impl std::error::Error for InvalidCountError {}

/// Number of seats at a table (at least 1).
///
/// # Examples
///
/// ```
/// use tablebook::Capacity;
///
/// let seats = Capacity::try_from(4).unwrap();
/// assert_eq!(seats.value(), 4);
///
/// assert!(Capacity::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(u32);

impl Capacity {
    /// Returns the number of seats.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` if a party of the given size fits at this table.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::{Capacity, PartySize};
    ///
    /// let seats = Capacity::try_from(4).unwrap();
    /// assert!(seats.fits(PartySize::try_from(4).unwrap()));
    /// assert!(!seats.fits(PartySize::try_from(5).unwrap()));
    /// ```
    #[must_use]
    pub const fn fits(self, party: PartySize) -> bool {
        self.0 >= party.0
    }

    /// Seats left empty when the given party sits here.
    #[must_use]
    pub const fn spare_seats(self, party: PartySize) -> u32 {
        self.0.saturating_sub(party.0)
    }
}

impl TryFrom<u32> for Capacity {
    type Error = InvalidCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidCountError {
                field: "capacity",
                value,
                reason: "a table needs at least one seat".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Capacity> for u32 {
    fn from(capacity: Capacity) -> Self {
        capacity.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of people in a booking (at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PartySize(u32);

impl PartySize {
    /// Returns the number of people.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PartySize {
    type Error = InvalidCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidCountError {
                field: "persons",
                value,
                reason: "a party needs at least one person".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<PartySize> for u32 {
    fn from(party: PartySize) -> Self {
        party.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical table with a fixed number of seats.
///
/// Tables carry no per-date state. Whether a table is free on a given day
/// is always computed from the reservations in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: TableId,
    capacity: Capacity,
}

impl Table {
    /// Creates a table record from its stored parts.
    #[must_use]
    pub const fn new(id: TableId, capacity: Capacity) -> Self {
        Self { id, capacity }
    }

    /// Returns the table id.
    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    /// Returns the seat count.
    #[must_use]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table #{} ({} seats)", self.id, self.capacity)
    }
}
