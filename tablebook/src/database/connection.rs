//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for the embedded `SQLite` store.

use rusqlite::{Connection, OpenFlags, TransactionBehavior};

use crate::error::Result;

use super::config::DatabaseConfig;
use super::migrations;
use super::transaction::map_busy;

/// A database connection wrapper with configuration.
///
/// Opening a `Database` is fail-fast: if the file cannot be opened, the
/// schema version is unsupported, or seeding fails, `open` returns the
/// error instead of handing out a half-working store.
///
/// # Examples
///
/// ```no_run
/// use tablebook::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/tablebook.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set the busy timeout, WAL mode and foreign key enforcement
    /// - Initialize or verify the database schema
    /// - Seed the default tables into a store that has never been seeded
    ///
    /// Schema creation and seeding run under one `IMMEDIATE` transaction,
    /// so processes racing to open a fresh store seed it exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization, verification or seeding fails
    /// - Another writer holds the lock past the busy timeout (`LockTimeout`)
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        Self::configure(conn, config)
    }

    /// Opens a private in-memory store, initialized and seeded like a file.
    ///
    /// # Errors
    ///
    /// Returns an error if schema initialization or seeding fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
    /// assert_eq!(Database::list_tables(db.connection()).unwrap().len(), 5);
    /// ```
    pub fn open_in_memory(config: DatabaseConfig) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn, config)
    }

    fn configure(mut conn: Connection, config: DatabaseConfig) -> Result<Self> {
        let seconds = config.busy_timeout.as_secs();
        conn.busy_timeout(config.busy_timeout)?;

        // PRAGMA journal_mode returns a row, so it goes through query_row
        let _: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .map_err(|e| map_busy(e, seconds))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;

        if !migrations::is_ready(&conn)? {
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(|e| map_busy(e, seconds))?;
            // re-checked under the write lock; another process may have won
            migrations::check_schema_compatibility(&tx)?;
            migrations::seed_default_tables(&tx, &config.seed_tables)?;
            tx.commit().map_err(|e| map_busy(e, seconds))?;
        }

        Ok(Self { conn, config })
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    ///
    /// Read-only queries and plan building take a `&Connection`, so a
    /// transaction can be passed wherever a connection is expected.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Capacity;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let config = DatabaseConfig::new(&path);

        let db = Database::open(config).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");

        let foreign_keys: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("test.db");
        let config = DatabaseConfig::new(&path);

        assert!(!path.parent().unwrap().exists());

        let _db = Database::open(config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_database_missing_without_auto_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.db");
        let mut config = DatabaseConfig::new(&path);
        config.auto_create = false;

        assert!(Database::open(config).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_reopen_does_not_reseed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        Database::open(DatabaseConfig::new(&path)).unwrap();
        let db = Database::open(DatabaseConfig::new(&path)).unwrap();

        let count: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM tables", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_custom_seed_tables() {
        let config = DatabaseConfig::new(":memory:")
            .with_seed_tables(vec![Capacity::try_from(12).unwrap()]);
        let db = Database::open_in_memory(config).unwrap();

        let capacity: u32 = db
            .connection()
            .query_row("SELECT capacity FROM tables", [], |row| row.get(0))
            .unwrap();
        assert_eq!(capacity, 12);
    }
}
