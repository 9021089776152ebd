//! Error types for the tablebook library.
//!
//! This module provides the error hierarchy for all operations in the
//! tablebook library, using `thiserror` for ergonomic error handling.

use chrono::NaiveDate;
use thiserror::Error;

use crate::customer::CustomerId;

/// Result type alias for operations that may fail with a tablebook error.
///
/// # Examples
///
/// ```
/// use tablebook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablebook library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred before anything touched the store.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No table has enough seats and is free on the requested date.
    #[error("no table available for {party_size} person(s) on {date}")]
    NoTableAvailable {
        /// The requested date.
        date: NaiveDate,
        /// The requested party size.
        party_size: u32,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The customer record could not be written.
    #[error("failed to create customer: {source}")]
    CustomerCreationFailed {
        /// The underlying storage error.
        #[source]
        source: rusqlite::Error,
    },

    /// The customer was written but the reservation insert failed.
    ///
    /// When the booking ran inside a transaction the customer row was rolled
    /// back together with everything else. On a bare connection it survives
    /// as an orphan.
    #[error("failed to create reservation (customer {customer_id} was written first): {source}")]
    ReservationCreationFailed {
        /// The customer created in the step before the failure.
        customer_id: CustomerId,
        /// The underlying storage error.
        #[source]
        source: rusqlite::Error,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Rendering output failed.
    #[error("failed to render {format} output: {message}")]
    Render {
        /// The output format being produced.
        format: &'static str,
        /// The serializer's complaint.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::table::InvalidCountError> for Error {
    fn from(err: crate::table::InvalidCountError) -> Self {
        Self::Validation {
            field: err.field.into(),
            message: err.reason,
        }
    }
}

impl From<crate::customer::ValidationError> for Error {
    fn from(err: crate::customer::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error means no table could be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tablebook::Error;
    ///
    /// let err = Error::NoTableAvailable {
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     party_size: 4,
    /// };
    /// assert!(err.is_no_table_available());
    /// ```
    #[must_use]
    pub fn is_no_table_available(&self) -> bool {
        matches!(self, Self::NoTableAvailable { .. })
    }

    /// Check if the error was raised by input validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if a customer record may have been left behind by this failure.
    #[must_use]
    pub fn is_partial_write(&self) -> bool {
        matches!(self, Self::ReservationCreationFailed { .. })
    }
}
