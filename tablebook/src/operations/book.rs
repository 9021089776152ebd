//! Booking operation planning and execution.
//!
//! A booking validates the request, asks the availability resolver for a
//! table, then writes a fresh customer and the reservation. [`book_table`]
//! runs the whole sequence inside one `IMMEDIATE` transaction.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::availability::AvailabilityResolver;
use crate::config::Config;
use crate::customer::CustomerDetails;
use crate::database::{map_busy, Database};
use crate::error::{Error, Result};
use crate::table::PartySize;

use super::executor::{ExecutionResult, PlanExecutor};
use super::plan::{OperationPlan, PlanAction};

/// Options for a booking request.
///
/// The fields are raw user input; nothing is validated until planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOptions {
    /// Display name of the customer.
    pub name: String,

    /// Contact string of the customer (free text).
    pub contact: String,

    /// The requested date.
    pub date: NaiveDate,

    /// Number of people.
    pub persons: u32,

    /// Report the assignment without writing anything.
    pub dry_run: bool,
}

impl BookOptions {
    /// Creates booking options.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tablebook::operations::BookOptions;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let options = BookOptions::new("Alice", "alice@example.com", date, 4);
    /// assert!(!options.dry_run);
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        date: NaiveDate,
        persons: u32,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            date,
            persons,
            dry_run: false,
        }
    }

    /// Sets the dry-run flag.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// A validated booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The customer to create.
    pub details: CustomerDetails,
    /// The requested date.
    pub date: NaiveDate,
    /// The party size.
    pub party_size: PartySize,
}

/// A booking plan generator.
pub struct BookPlan<'a> {
    options: BookOptions,
    config: &'a Config,
}

impl<'a> BookPlan<'a> {
    /// Creates a new booking plan with the given options and config.
    #[must_use]
    pub const fn new(options: BookOptions, config: &'a Config) -> Self {
        Self { options, config }
    }

    /// Returns the options this plan was built from.
    #[must_use]
    pub const fn options(&self) -> &BookOptions {
        &self.options
    }

    /// Validates the raw request without touching storage.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the name or contact is blank, the
    /// party is empty, or the party exceeds a configured `max_party_size`.
    /// Without a configured limit a large party is left to the table
    /// search, which reports `NoTableAvailable` when nothing seats it.
    pub fn validate(&self) -> Result<BookingRequest> {
        let details = CustomerDetails::new(&self.options.name, &self.options.contact)?;

        if let Some(limit) = self
            .config
            .party_size_limit()
            .filter(|&limit| self.options.persons > limit)
        {
            return Err(Error::Validation {
                field: "persons".into(),
                message: format!(
                    "party of {} exceeds the maximum party size of {limit}",
                    self.options.persons
                ),
            });
        }
        let party_size = PartySize::try_from(self.options.persons).map_err(|e| {
            Error::Validation {
                field: "persons".into(),
                message: e.reason,
            }
        })?;

        Ok(BookingRequest {
            details,
            date: self.options.date,
            party_size,
        })
    }

    /// Builds the plan: validate, then resolve a table.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any query runs, or
    /// `Error::NoTableAvailable` if no table fits the party on that date.
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let request = self.validate()?;

        let resolver = AvailabilityResolver::new(conn, self.config.selection());
        let table = resolver
            .find_table(request.date, request.party_size)?
            .ok_or(Error::NoTableAvailable {
                date: request.date,
                party_size: request.party_size.value(),
            })?;

        let mut plan = OperationPlan::new(format!(
            "Book a table for {} on {}",
            request.party_size, request.date
        ))
        .add_action(PlanAction::CreateCustomer(request.details))
        .add_action(PlanAction::CreateReservation {
            date: request.date,
            party_size: request.party_size,
            table,
        });

        let spare = table.capacity().spare_seats(request.party_size);
        if spare > 0 {
            plan = plan.add_warning(format!(
                "{table} leaves {spare} seat(s) empty for a party of {}",
                request.party_size
            ));
        }

        Ok(plan)
    }
}

/// Books a table in one `IMMEDIATE` transaction.
///
/// The write lock is taken before the availability check, so two
/// concurrent callers can never both receive the same table for the same
/// date. Any failure rolls back every write, including the customer row.
/// In dry-run mode the transaction is rolled back after planning.
///
/// # Errors
///
/// Returns a validation error (before the store is touched),
/// `Error::NoTableAvailable`, `Error::LockTimeout`, or one of the
/// creation failures.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::config::Config;
/// use tablebook::database::{Database, DatabaseConfig};
/// use tablebook::operations::{book_table, BookOptions};
///
/// let mut db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let result = book_table(
///     &mut db,
///     BookOptions::new("Alice", "alice@example.com", date, 4),
///     &Config::default(),
/// )
/// .unwrap();
///
/// let reservation = result.reservation.unwrap();
/// assert_eq!(reservation.table().capacity().value(), 4);
/// ```
pub fn book_table(db: &mut Database, options: BookOptions, config: &Config) -> Result<ExecutionResult> {
    let dry_run = options.dry_run;
    let planner = BookPlan::new(options, config);
    planner.validate()?;

    let seconds = db.config().busy_timeout.as_secs();
    let tx = db.begin_transaction()?;
    let plan = planner.build_plan(&tx)?;
    log::debug!("{}: {} action(s)", plan.description, plan.len());

    let mut executor = PlanExecutor::new(&tx);
    if dry_run {
        executor = executor.dry_run();
    }
    let result = executor.execute(&plan)?;

    if !dry_run {
        tx.commit().map_err(|e| map_busy(e, seconds))?;
    }
    Ok(result)
}
