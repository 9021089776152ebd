//! Database CRUD operations for tables, customers and reservations.
//!
//! Every query is an associated function taking a `&Connection`, so the
//! same code runs on a plain connection and inside a transaction. The few
//! methods on `&mut Database` open their own `IMMEDIATE` transaction.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

use crate::availability::TableSelection;
use crate::customer::{Customer, CustomerDetails, CustomerId};
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};
use crate::table::{Capacity, PartySize, Table, TableId};

use super::connection::Database;
use super::schema::{DELETE_RESERVATION, INSERT_CUSTOMER, INSERT_RESERVATION, INSERT_TABLE};

const SELECT_TABLES: &str = "SELECT id, capacity FROM tables ORDER BY id";

const SELECT_TABLE: &str = "SELECT id, capacity FROM tables WHERE id = ?";

const SELECT_CUSTOMER: &str = "SELECT id, name, contact FROM customers WHERE id = ?";

const COUNT_CUSTOMERS: &str = "SELECT COUNT(*) FROM customers";

const SELECT_FREE_TABLES: &str = r"
    SELECT id, capacity
    FROM tables
    WHERE capacity >= ?1
      AND id NOT IN (SELECT table_id FROM reservations WHERE date = ?2)
";

const CHECK_TABLE_BOOKED: &str =
    "SELECT COUNT(*) > 0 FROM reservations WHERE table_id = ? AND date = ?";

// Every reservation query shares this projection so `row_to_reservation`
// can read them all.
const SELECT_RESERVATIONS: &str = r"
    SELECT r.id, r.date, r.persons, t.id, t.capacity, c.id, c.name, c.contact
    FROM reservations r
    JOIN tables t ON t.id = r.table_id
    JOIN customers c ON c.id = r.customer_id
";

fn conversion_error(
    index: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(err))
}

/// Reads a table from `id, capacity` starting at column `offset`.
fn row_to_table(row: &Row<'_>, offset: usize) -> rusqlite::Result<Table> {
    let id: i64 = row.get(offset)?;
    let seats: u32 = row.get(offset + 1)?;
    let capacity = Capacity::try_from(seats).map_err(|e| conversion_error(offset + 1, e))?;
    Ok(Table::new(TableId::new(id), capacity))
}

/// Reads a customer from `id, name, contact` starting at column `offset`.
fn row_to_customer(row: &Row<'_>, offset: usize) -> rusqlite::Result<Customer> {
    let id: i64 = row.get(offset)?;
    let name: String = row.get(offset + 1)?;
    let contact: String = row.get(offset + 2)?;
    let details = CustomerDetails::new(name, contact).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(offset + 1, Type::Text, Box::new(e))
    })?;
    Ok(Customer::new(CustomerId::new(id), details))
}

/// Expects the columns of `SELECT_RESERVATIONS`.
fn row_to_reservation(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let date: NaiveDate = row.get(1)?;
    let persons: u32 = row.get(2)?;
    let party_size = PartySize::try_from(persons).map_err(|e| conversion_error(2, e))?;
    let table = row_to_table(row, 3)?;
    let customer = row_to_customer(row, 5)?;

    Ok(Reservation::new(
        ReservationId::new(id),
        date,
        party_size,
        table,
        customer,
    ))
}

impl Database {
    /// Inserts a new table and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::{Database, DatabaseConfig};
    /// use tablebook::Capacity;
    ///
    /// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
    /// let table = Database::create_table(db.connection(), Capacity::try_from(10).unwrap()).unwrap();
    /// assert_eq!(table.capacity().value(), 10);
    /// ```
    pub fn create_table(conn: &Connection, capacity: Capacity) -> Result<Table> {
        conn.execute(INSERT_TABLE, params![capacity.value()])?;
        Ok(Table::new(TableId::new(conn.last_insert_rowid()), capacity))
    }

    /// Inserts a new customer record.
    ///
    /// There is no deduplication; every call creates a fresh row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_customer(conn: &Connection, details: &CustomerDetails) -> Result<Customer> {
        conn.execute(INSERT_CUSTOMER, params![details.name(), details.contact()])?;
        Ok(Customer::new(
            CustomerId::new(conn.last_insert_rowid()),
            details.clone(),
        ))
    }

    /// Inserts a reservation row and returns its id.
    ///
    /// Capacity and exclusivity are not re-checked here. The availability
    /// query runs first in the booking workflow, and a second booking of
    /// the same table on the same date is rejected by the
    /// `UNIQUE (table_id, date)` constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including constraint
    /// violations.
    pub fn create_reservation(
        conn: &Connection,
        date: NaiveDate,
        party_size: PartySize,
        table_id: TableId,
        customer_id: CustomerId,
    ) -> Result<ReservationId> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                date,
                party_size.value(),
                table_id.value(),
                customer_id.value()
            ],
        )?;
        Ok(ReservationId::new(conn.last_insert_rowid()))
    }

    /// Retrieves a table by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_table(conn: &Connection, id: TableId) -> Result<Option<Table>> {
        let table = conn
            .query_row(SELECT_TABLE, [id.value()], |row| row_to_table(row, 0))
            .optional()?;
        Ok(table)
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_customer(conn: &Connection, id: CustomerId) -> Result<Option<Customer>> {
        let customer = conn
            .query_row(SELECT_CUSTOMER, [id.value()], |row| row_to_customer(row, 0))
            .optional()?;
        Ok(customer)
    }

    /// Retrieves a reservation with its table and customer attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if it doesn't
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        let sql = format!("{SELECT_RESERVATIONS} WHERE r.id = ?");
        let reservation = conn
            .query_row(&sql, [id.value()], row_to_reservation)
            .optional()?;
        Ok(reservation)
    }

    /// Lists all tables ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tables(conn: &Connection) -> Result<Vec<Table>> {
        let mut stmt = conn.prepare(SELECT_TABLES)?;
        let tables = stmt
            .query_map([], |row| row_to_table(row, 0))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(tables)
    }

    /// Lists every table that seats `party_size` and is unbooked on `date`,
    /// in the given selection order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_free_tables(
        conn: &Connection,
        date: NaiveDate,
        party_size: PartySize,
        selection: TableSelection,
    ) -> Result<Vec<Table>> {
        let sql = format!("{SELECT_FREE_TABLES} ORDER BY {}", selection.order_by());
        let mut stmt = conn.prepare(&sql)?;
        let tables = stmt
            .query_map(params![party_size.value(), date], |row| row_to_table(row, 0))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(tables)
    }

    /// Finds one table with enough seats that has no reservation on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tablebook::availability::TableSelection;
    /// use tablebook::database::{Database, DatabaseConfig};
    /// use tablebook::PartySize;
    ///
    /// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let party = PartySize::try_from(3).unwrap();
    ///
    /// let table = Database::find_available_table(
    ///     db.connection(),
    ///     date,
    ///     party,
    ///     TableSelection::SmallestFit,
    /// )
    /// .unwrap()
    /// .unwrap();
    /// assert_eq!(table.capacity().value(), 4);
    /// ```
    pub fn find_available_table(
        conn: &Connection,
        date: NaiveDate,
        party_size: PartySize,
        selection: TableSelection,
    ) -> Result<Option<Table>> {
        let sql = format!(
            "{SELECT_FREE_TABLES} ORDER BY {} LIMIT 1",
            selection.order_by()
        );
        let table = conn
            .query_row(&sql, params![party_size.value(), date], |row| {
                row_to_table(row, 0)
            })
            .optional()?;
        Ok(table)
    }

    /// Returns `true` if the table already has a reservation on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_table_booked(conn: &Connection, table_id: TableId, date: NaiveDate) -> Result<bool> {
        let booked: bool =
            conn.query_row(CHECK_TABLE_BOOKED, params![table_id.value(), date], |row| {
                row.get(0)
            })?;
        Ok(booked)
    }

    /// Deletes a reservation in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and deleted
    /// - `Ok(false)` if no reservation has that id
    pub fn delete_reservation(&mut self, id: ReservationId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let removed = Self::delete_reservation_simple(&tx, id)?;

        tx.commit()?;
        Ok(removed)
    }

    /// Deletes a reservation (without creating a transaction).
    ///
    /// Unknown and already-deleted ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservation_simple(conn: &Connection, id: ReservationId) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_RESERVATION, [id.value()])?;
        Ok(rows_affected > 0)
    }

    /// Lists reservations dated on or after `from`, ordered by date then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tablebook::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// assert!(Database::list_upcoming_reservations(db.connection(), today)
    ///     .unwrap()
    ///     .is_empty());
    /// ```
    pub fn list_upcoming_reservations(
        conn: &Connection,
        from: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        let sql = format!("{SELECT_RESERVATIONS} WHERE r.date >= ? ORDER BY r.date, r.id");
        let mut stmt = conn.prepare(&sql)?;
        let reservations = stmt
            .query_map([from], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Lists the reservations on a single date, ordered by table id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_reservations_on(conn: &Connection, date: NaiveDate) -> Result<Vec<Reservation>> {
        let sql = format!("{SELECT_RESERVATIONS} WHERE r.date = ? ORDER BY t.id");
        let mut stmt = conn.prepare(&sql)?;
        let reservations = stmt
            .query_map([date], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Counts stored customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_customers(conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row(COUNT_CUSTOMERS, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Verifies the integrity of the database.
    ///
    /// Runs `SQLite`'s `PRAGMA integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects corruption.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
    /// db.verify_integrity().unwrap();
    /// ```
    pub fn verify_integrity(&self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}
