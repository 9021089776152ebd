//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use rusqlite::Connection;

use crate::customer::Customer;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::table::Table;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The table assigned or created (in dry-run, the one that would be).
    pub table: Option<Table>,

    /// The customer that was created.
    pub customer: Option<Customer>,

    /// The reservation that was created, with table and customer attached.
    pub reservation: Option<Reservation>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            table: None,
            customer: None,
            reservation: None,
        }
    }
}

/// Executes operation plans against a connection.
///
/// The connection may be a plain connection or an open transaction. On a
/// plain connection every action commits on its own, so a reservation
/// failure leaves the customer created before it in place.
///
/// # Examples
///
/// ```
/// use tablebook::database::{Database, DatabaseConfig};
/// use tablebook::operations::{OperationPlan, PlanAction, PlanExecutor};
/// use tablebook::Capacity;
///
/// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
/// let plan = OperationPlan::new("Add a table")
///     .add_action(PlanAction::CreateTable(Capacity::try_from(10).unwrap()));
///
/// // Dry-run execution
/// let result = PlanExecutor::new(db.connection()).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
///
/// // Normal execution
/// let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
/// assert_eq!(result.table.unwrap().capacity().value(), 10);
/// ```
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan but does not
    /// modify the database.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan, action by action, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails. Customer and reservation
    /// insert failures are reported as `CustomerCreationFailed` and
    /// `ReservationCreationFailed`.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            let mut result = ExecutionResult::new(plan, true);
            result.table = plan.assigned_table().copied();
            return Ok(result);
        }

        let mut result = ExecutionResult::new(plan, false);
        for action in &plan.actions {
            log::debug!("executing: {}", action.description());
            self.execute_action(action, &mut result)?;
        }
        Ok(result)
    }

    fn execute_action(&self, action: &PlanAction, result: &mut ExecutionResult) -> Result<()> {
        match action {
            PlanAction::CreateCustomer(details) => {
                let customer = Database::create_customer(self.conn, details)
                    .map_err(|e| match e {
                        Error::Database(source) => Error::CustomerCreationFailed { source },
                        other => other,
                    })?;
                result.customer = Some(customer);
            }
            PlanAction::CreateReservation {
                date,
                party_size,
                table,
            } => {
                let customer = result.customer.clone().ok_or_else(|| Error::Validation {
                    field: "customer".into(),
                    message: "a reservation needs a customer created earlier in the plan".into(),
                })?;
                let id = Database::create_reservation(
                    self.conn,
                    *date,
                    *party_size,
                    table.id(),
                    customer.id(),
                )
                .map_err(|e| match e {
                    Error::Database(source) => Error::ReservationCreationFailed {
                        customer_id: customer.id(),
                        source,
                    },
                    other => other,
                })?;
                result.table = Some(*table);
                result.reservation =
                    Some(Reservation::new(id, *date, *party_size, *table, customer));
            }
            PlanAction::CreateTable(capacity) => {
                result.table = Some(Database::create_table(self.conn, *capacity)?);
            }
        }
        Ok(())
    }
}
