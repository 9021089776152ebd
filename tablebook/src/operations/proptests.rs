//! Property-based tests for the booking workflow.
//!
//! These tests drive `book_table` with random request sequences and check
//! the invariants that must hold after every successful booking.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::config::Config;
use crate::database::test_util::create_test_database;
use crate::database::Database;
use crate::operations::{book_table, BookOptions, BookPlan};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Sequences of (day offset, persons) requests.
fn requests_strategy() -> impl Strategy<Value = Vec<(u64, u32)>> {
    prop::collection::vec((0u64..3, 1u32..=9), 1..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every booking fits its table and no (table, date) pair repeats.
    #[test]
    fn prop_bookings_never_overlap(requests in requests_strategy()) {
        let mut db = create_test_database();
        let config = Config::default();
        let mut taken = HashSet::new();

        for (offset, persons) in requests {
            let date = base_date() + Days::new(offset);
            let options = BookOptions::new("Guest", "555", date, persons);
            match book_table(&mut db, options, &config) {
                Ok(result) => {
                    let reservation = result.reservation.unwrap();
                    prop_assert!(reservation.party_size().value()
                        <= reservation.table().capacity().value());
                    prop_assert!(taken.insert((reservation.table().id(), date)));
                }
                Err(err) => prop_assert!(err.is_no_table_available()),
            }
        }

        let customers = Database::count_customers(db.connection()).unwrap();
        prop_assert_eq!(customers, taken.len() as u64);
    }

    /// Blank names are rejected whatever the rest of the request is.
    #[test]
    fn prop_blank_name_always_rejected(
        name in "[ \t]{0,6}",
        persons in 0u32..40,
    ) {
        let config = Config::default();
        let options = BookOptions::new(name, "555", base_date(), persons);
        let err = BookPlan::new(options, &config).validate().unwrap_err();
        prop_assert!(err.is_validation());
    }
}
