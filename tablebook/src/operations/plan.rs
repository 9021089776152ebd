//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use chrono::NaiveDate;

use crate::customer::CustomerDetails;
use crate::table::{Capacity, PartySize, Table};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Create a customer record.
    CreateCustomer(CustomerDetails),

    /// Book `table` on `date` for the customer created earlier in the plan.
    CreateReservation {
        /// The booked date.
        date: NaiveDate,
        /// The number of people.
        party_size: PartySize,
        /// The table chosen while planning.
        table: Table,
    },

    /// Add a table with the given capacity.
    CreateTable(Capacity),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateCustomer(details) => {
                format!("Create customer {} ({})", details.name(), details.contact())
            }
            Self::CreateReservation {
                date,
                party_size,
                table,
            } => format!("Reserve {table} on {date} for {party_size} person(s)"),
            Self::CreateTable(capacity) => format!("Add table with {capacity} seats"),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book a table");
    /// assert_eq!(plan.description, "Book a table");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::{OperationPlan, PlanAction};
    /// use tablebook::Capacity;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_action(PlanAction::CreateTable(Capacity::try_from(4).unwrap()));
    ///
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// The table a booking plan assigns, if it contains a reservation.
    #[must_use]
    pub fn assigned_table(&self) -> Option<&Table> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::CreateReservation { table, .. } => Some(table),
            _ => None,
        })
    }
}
