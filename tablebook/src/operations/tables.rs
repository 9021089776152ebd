//! Table administration.

use rusqlite::Connection;

use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::table::{Capacity, Table};

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Plans the addition of a table.
///
/// # Errors
///
/// Returns `Error::Validation` if the capacity is zero or larger than a
/// configured `max_table_capacity`.
pub fn plan_add_table(capacity: u32, config: &Config) -> Result<OperationPlan> {
    if let Some(limit) = config.table_capacity_limit().filter(|&limit| capacity > limit) {
        return Err(Error::Validation {
            field: "capacity".into(),
            message: format!("capacity {capacity} exceeds the maximum table capacity of {limit}"),
        });
    }
    let capacity = Capacity::try_from(capacity)?;

    Ok(OperationPlan::new(format!("Add a {capacity}-seat table"))
        .add_action(PlanAction::CreateTable(capacity)))
}

/// Adds a table and returns it with its new id.
///
/// # Errors
///
/// Returns a validation error for an out-of-range capacity, or a storage
/// error if the insert fails.
///
/// # Examples
///
/// ```
/// use tablebook::config::Config;
/// use tablebook::database::{Database, DatabaseConfig};
/// use tablebook::operations::add_table;
///
/// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
/// let table = add_table(db.connection(), 10, &Config::default()).unwrap();
/// assert_eq!(table.id().value(), 6);
/// ```
pub fn add_table(conn: &Connection, capacity: u32, config: &Config) -> Result<Table> {
    let plan = plan_add_table(capacity, config)?;
    let result = PlanExecutor::new(conn).execute(&plan)?;
    result.table.ok_or_else(|| Error::NotFound {
        resource: "created table".into(),
    })
}

/// Lists every table in id order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_tables(conn: &Connection) -> Result<Vec<Table>> {
    Database::list_tables(conn)
}
