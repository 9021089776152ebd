//! Transaction management utilities.
//!
//! Multi-step workflows (booking in particular) run inside one `IMMEDIATE`
//! transaction so the write lock is taken before the availability check.

use rusqlite::{ErrorCode, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

impl Database {
    /// Begins an `IMMEDIATE` transaction on this database.
    ///
    /// The transaction rolls back when dropped unless `commit` is called.
    /// A `Transaction` dereferences to a `Connection`, so every associated
    /// query function accepts `&tx`.
    ///
    /// # Errors
    ///
    /// Returns `Error::LockTimeout` if another writer holds the lock longer
    /// than the configured busy timeout, or a database error otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::{Database, DatabaseConfig};
    /// use tablebook::Capacity;
    ///
    /// let mut db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
    ///
    /// let tx = db.begin_transaction().unwrap();
    /// Database::create_table(&tx, Capacity::try_from(12).unwrap()).unwrap();
    /// tx.commit().unwrap();
    ///
    /// assert_eq!(Database::list_tables(db.connection()).unwrap().len(), 6);
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let seconds = self.config().busy_timeout.as_secs();
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| map_busy(e, seconds))
    }
}

/// Converts `SQLITE_BUSY` / `SQLITE_LOCKED` into a lock timeout.
pub(crate) fn map_busy(err: rusqlite::Error, seconds: u64) -> Error {
    match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => Error::LockTimeout { seconds },
        _ => Error::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{capacity, create_test_database};
    use crate::database::DatabaseConfig;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_commit_persists() {
        let mut db = create_test_database();

        let tx = db.begin_transaction().unwrap();
        Database::create_table(&tx, capacity(3)).unwrap();
        tx.commit().unwrap();

        assert_eq!(Database::list_tables(db.connection()).unwrap().len(), 6);
    }

    #[test]
    fn test_drop_rolls_back() {
        let mut db = create_test_database();

        {
            let tx = db.begin_transaction().unwrap();
            Database::create_table(&tx, capacity(3)).unwrap();
        }

        assert_eq!(Database::list_tables(db.connection()).unwrap().len(), 5);
    }

    #[test]
    fn test_second_writer_times_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        let mut first = Database::open(DatabaseConfig::new(&path)).unwrap();
        let mut second = Database::open(
            DatabaseConfig::new(&path).with_busy_timeout(Duration::from_millis(50)),
        )
        .unwrap();

        let _held = first.begin_transaction().unwrap();
        let err = second.begin_transaction().unwrap_err();
        assert!(matches!(err, Error::LockTimeout { .. }));
    }

    #[test]
    fn test_map_busy_passes_other_errors() {
        let err = map_busy(rusqlite::Error::QueryReturnedNoRows, 5);
        assert!(matches!(err, Error::Database(_)));
    }
}
