//! Presentation of workflow results.
//!
//! Front ends never format records themselves: they pick a [`Renderer`]
//! for the configured [`OutputFormat`] and hand it what the booking
//! operations returned.

mod formatters;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::operations::{BookOptions, DayAvailability, ExecutionResult};
use crate::reservation::{seating_time, Reservation};
use crate::table::Table;
use crate::Result;

pub use formatters::{CsvRenderer, JsonRenderer, TextRenderer};

/// Trait for rendering workflow results into one output format.
pub trait Renderer {
    /// Render a list of reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render_list(&self, reservations: &[Reservation]) -> Result<String>;

    /// Render the booking request as entered.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render_form(&self, options: &BookOptions) -> Result<String>;

    /// Render the outcome of a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render_confirmation(&self, result: &ExecutionResult) -> Result<String>;

    /// Render the table set.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render_tables(&self, tables: &[Table]) -> Result<String>;

    /// Render the occupancy of one date.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render_availability(&self, view: &DayAvailability) -> Result<String>;
}

impl OutputFormat {
    /// Create the renderer for this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::config::OutputFormat;
    ///
    /// let renderer = OutputFormat::Text.renderer();
    /// assert_eq!(renderer.render_list(&[]).unwrap(), "No upcoming reservations.");
    /// ```
    #[must_use]
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Json => Box::new(JsonRenderer),
            Self::Csv => Box::new(CsvRenderer),
        }
    }
}

/// Flat view of a reservation shared by the JSON and CSV renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationRow {
    /// Reservation id.
    pub id: i64,
    /// Booked date.
    pub date: NaiveDate,
    /// Seating time, `HH:MM`.
    pub time: String,
    /// Party size.
    pub persons: u32,
    /// Assigned table id.
    pub table_id: i64,
    /// Seats at the assigned table.
    pub capacity: u32,
    /// Customer id.
    pub customer_id: i64,
    /// Customer name.
    pub name: String,
    /// Customer contact.
    pub contact: String,
}

impl From<&Reservation> for ReservationRow {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id().value(),
            date: reservation.date(),
            time: seating_time().format("%H:%M").to_string(),
            persons: reservation.party_size().value(),
            table_id: reservation.table().id().value(),
            capacity: reservation.table().capacity().value(),
            customer_id: reservation.customer().id().value(),
            name: reservation.customer().name().to_string(),
            contact: reservation.customer().contact().to_string(),
        }
    }
}

/// One line of the availability view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityRow {
    /// Table id.
    pub table_id: i64,
    /// Seats at the table.
    pub capacity: u32,
    /// `free` or `booked`.
    pub status: &'static str,
    /// Reservation holding the table, if booked.
    pub reservation_id: Option<i64>,
}

impl AvailabilityRow {
    fn rows(view: &DayAvailability) -> Vec<Self> {
        let mut rows: Vec<Self> = view
            .booked
            .iter()
            .map(|r| Self {
                table_id: r.table().id().value(),
                capacity: r.table().capacity().value(),
                status: "booked",
                reservation_id: Some(r.id().value()),
            })
            .chain(view.free.iter().map(|t| Self {
                table_id: t.id().value(),
                capacity: t.capacity().value(),
                status: "free",
                reservation_id: None,
            }))
            .collect();
        rows.sort_by_key(|row| row.table_id);
        rows
    }
}

/// The booking request as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRow {
    /// Customer name.
    pub name: String,
    /// Customer contact.
    pub contact: String,
    /// Requested date.
    pub date: NaiveDate,
    /// Party size.
    pub persons: u32,
}

impl From<&BookOptions> for FormRow {
    fn from(options: &BookOptions) -> Self {
        Self {
            name: options.name.clone(),
            contact: options.contact.clone(),
            date: options.date,
            persons: options.persons,
        }
    }
}
