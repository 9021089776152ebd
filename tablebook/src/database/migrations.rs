//! Database schema management and first-run seeding.
//!
//! This module handles schema initialization, version checking, and the
//! one-time seeding of the default table set.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::table::Capacity;

use super::schema::{
    CREATE_CUSTOMERS_TABLE, CREATE_DATE_INDEX, CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE,
    CREATE_TABLES_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, INSERT_SEEDED,
    INSERT_TABLE, SELECT_SCHEMA_VERSION, SELECT_SEEDED,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database. Every statement is idempotent.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use tablebook::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_TABLES_TABLE, [])?;
    conn.execute(CREATE_CUSTOMERS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_DATE_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (both of which mean version 0).
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let metadata_exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'metadata'",
        [],
        |row| row.get(0),
    )?;
    if !metadata_exists {
        return Ok(0);
    }

    let value: Option<String> = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;

    match value {
        None => Ok(0),
        Some(value) => value.parse::<i32>().map_err(|e| Error::DatabaseCorruption {
            details: format!("schema version '{value}' is not a number: {e}"),
        }),
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// This function:
/// 1. Checks the current schema version
/// 2. If version is 0, initializes the schema
/// 3. If version differs from the current one, returns an error
///
/// # Errors
///
/// Returns an error if the schema version is incompatible, or if
/// initialization or the version query fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use tablebook::database::migrations::check_schema_compatibility;
///
/// let conn = Connection::open_in_memory().unwrap();
/// check_schema_compatibility(&conn).unwrap();
/// ```
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        log::debug!("initializing schema version {CURRENT_SCHEMA_VERSION}");
        return initialize_schema(conn);
    }

    if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}

/// Returns true if the store is at the current schema version and has
/// been seeded, so opening it needs no writes.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read.
pub fn is_ready(conn: &Connection) -> Result<bool> {
    if get_schema_version(conn)? != CURRENT_SCHEMA_VERSION {
        return Ok(false);
    }
    Ok(conn
        .query_row(SELECT_SEEDED, [], |row| row.get::<_, String>(0))
        .optional()?
        .is_some())
}

/// Seeds the given table capacities if this store has never been seeded.
///
/// Seeding happens at most once per store. A marker row in `metadata`
/// records it, so a store whose tables were later removed by hand is not
/// refilled. A store that already holds tables (for example one created
/// before the marker existed) is marked as seeded without inserting.
///
/// Returns the number of tables inserted.
///
/// # Errors
///
/// Returns an error if any query or insert fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use tablebook::database::migrations::{check_schema_compatibility, seed_default_tables};
/// use tablebook::Capacity;
///
/// let conn = Connection::open_in_memory().unwrap();
/// check_schema_compatibility(&conn).unwrap();
///
/// let seats: Vec<Capacity> = [2, 4].into_iter().map(|c| Capacity::try_from(c).unwrap()).collect();
/// assert_eq!(seed_default_tables(&conn, &seats).unwrap(), 2);
/// assert_eq!(seed_default_tables(&conn, &seats).unwrap(), 0);
/// ```
pub fn seed_default_tables(conn: &Connection, capacities: &[Capacity]) -> Result<usize> {
    let already_seeded = conn
        .query_row(SELECT_SEEDED, [], |row| row.get::<_, String>(0))
        .optional()?
        .is_some();
    if already_seeded {
        return Ok(0);
    }

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM tables", [], |row| row.get(0))?;
    let mut inserted = 0;
    if existing == 0 {
        let mut stmt = conn.prepare(INSERT_TABLE)?;
        for capacity in capacities {
            stmt.execute(params![capacity.value()])?;
            inserted += 1;
        }
        log::debug!("seeded {inserted} default table(s)");
    }

    conn.execute(INSERT_SEEDED, [])?;
    Ok(inserted)
}
