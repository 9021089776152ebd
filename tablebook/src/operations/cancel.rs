//! Reservation removal.

use crate::database::Database;
use crate::error::Result;
use crate::reservation::ReservationId;

/// Removes a reservation by id.
///
/// Returns `true` if a reservation was removed. Unknown or already removed
/// ids return `false`; they are not an error. The customer record is kept.
///
/// # Errors
///
/// Returns an error only if the store fails.
///
/// # Examples
///
/// ```
/// use tablebook::database::{Database, DatabaseConfig};
/// use tablebook::operations::remove_reservation;
/// use tablebook::ReservationId;
///
/// let mut db = Database::open_in_memory(DatabaseConfig::new(":memory:")).unwrap();
/// assert!(!remove_reservation(&mut db, ReservationId::new(42)).unwrap());
/// ```
pub fn remove_reservation(db: &mut Database, id: ReservationId) -> Result<bool> {
    let removed = db.delete_reservation(id)?;
    if removed {
        log::debug!("removed reservation #{id}");
    } else {
        log::debug!("reservation #{id} not found, nothing removed");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::test_util::{create_test_database, date};
    use crate::operations::{book_table, BookOptions};

    #[test]
    fn test_remove_frees_table() {
        let mut db = create_test_database();
        let config = Config::default();
        let options = BookOptions::new("Alice", "555", date(2024, 6, 1), 8);

        let first = book_table(&mut db, options.clone(), &config)
            .unwrap()
            .reservation
            .unwrap();
        assert!(book_table(&mut db, options.clone(), &config)
            .unwrap_err()
            .is_no_table_available());

        assert!(remove_reservation(&mut db, first.id()).unwrap());

        let again = book_table(&mut db, options, &config)
            .unwrap()
            .reservation
            .unwrap();
        assert_eq!(again.table(), first.table());
        assert_ne!(again.id(), first.id());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut db = create_test_database();
        let reservation = book_table(
            &mut db,
            BookOptions::new("Bob", "555", date(2024, 6, 1), 2),
            &Config::default(),
        )
        .unwrap()
        .reservation
        .unwrap();

        assert!(remove_reservation(&mut db, reservation.id()).unwrap());
        assert!(!remove_reservation(&mut db, reservation.id()).unwrap());
        assert!(!remove_reservation(&mut db, ReservationId::new(999)).unwrap());
        assert_eq!(Database::count_customers(db.connection()).unwrap(), 1);
    }
}
