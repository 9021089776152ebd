//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the tablebook store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Capacities seeded into an empty store on first open.
pub const DEFAULT_TABLE_CAPACITIES: [u32; 5] = [2, 4, 4, 6, 8];

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the tables table.
pub const CREATE_TABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS tables (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        capacity INTEGER NOT NULL CHECK (capacity > 0)
    )";

/// SQL statement to create the customers table.
pub const CREATE_CUSTOMERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        contact TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Dates are stored as ISO-8601 text so that lexical order matches
/// calendar order. The `UNIQUE (table_id, date)` constraint is the last
/// line of defence against double-booking a table on one day.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        persons INTEGER NOT NULL CHECK (persons > 0),
        table_id INTEGER NOT NULL REFERENCES tables(id),
        customer_id INTEGER NOT NULL REFERENCES customers(id),
        UNIQUE (table_id, date)
    )";

/// SQL statement to create an index on the reservation date.
///
/// This index speeds up availability lookups and upcoming lists.
pub const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to check whether the default tables were already seeded.
pub const SELECT_SEEDED: &str = "SELECT value FROM metadata WHERE key = 'tables_seeded'";

/// SQL statement to record that the default tables were seeded.
pub const INSERT_SEEDED: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('tables_seeded', '1')";

/// SQL statement to insert a table.
pub const INSERT_TABLE: &str = "INSERT INTO tables (capacity) VALUES (?)";

/// SQL statement to insert a customer.
pub const INSERT_CUSTOMER: &str = "INSERT INTO customers (name, contact) VALUES (?, ?)";

/// SQL statement to insert a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (date, persons, table_id, customer_id)
    VALUES (?, ?, ?, ?)
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";
