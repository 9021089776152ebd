//! Property-based tests for availability resolution.
//!
//! These tests book random sets of (table, date) pairs and check that the
//! resolver never hands out a table that is too small or already taken.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::availability::{AvailabilityResolver, TableSelection};
use crate::database::test_util::{create_test_database, details};
use crate::database::Database;
use crate::table::{PartySize, TableId};

// ============================================================================
// STRATEGY DEFINITIONS
// ============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Pairs of (seeded table id, day offset) to book before querying.
fn bookings_strategy() -> impl Strategy<Value = HashSet<(i64, u64)>> {
    prop::collection::hash_set((1i64..=5, 0u64..4), 0..12)
}

fn selection_strategy() -> impl Strategy<Value = TableSelection> {
    prop_oneof![
        Just(TableSelection::SmallestFit),
        Just(TableSelection::FirstById)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// A returned table always seats the party and is free on the date.
    #[test]
    fn prop_found_table_fits_and_is_free(
        bookings in bookings_strategy(),
        persons in 1u32..=10,
        offset in 0u64..4,
        selection in selection_strategy(),
    ) {
        let db = create_test_database();
        let conn = db.connection();
        for (table, day) in &bookings {
            let customer = Database::create_customer(conn, &details("Guest")).unwrap();
            let booked_on = base_date() + Days::new(*day);
            Database::create_reservation(
                conn,
                booked_on,
                PartySize::try_from(1).unwrap(),
                TableId::new(*table),
                customer.id(),
            )
            .unwrap();
        }

        let date = base_date() + Days::new(offset);
        let party = PartySize::try_from(persons).unwrap();
        let resolver = AvailabilityResolver::new(conn, selection);

        let free = resolver.free_tables(date, party).unwrap();
        match resolver.find_table(date, party).unwrap() {
            Some(table) => {
                prop_assert!(table.capacity().fits(party));
                prop_assert!(!bookings.contains(&(table.id().value(), offset)));
                prop_assert_eq!(free.first(), Some(&table));
            }
            None => prop_assert!(free.is_empty()),
        }

        for table in &free {
            prop_assert!(table.capacity().fits(party));
            prop_assert!(resolver.is_table_free(table, date).unwrap());
        }
    }

    /// Smallest-fit never picks a larger table than first-by-id.
    #[test]
    fn prop_smallest_fit_wastes_no_more_seats(
        bookings in bookings_strategy(),
        persons in 1u32..=8,
    ) {
        let db = create_test_database();
        let conn = db.connection();
        let date = base_date();
        for (table, day) in &bookings {
            if *day != 0 {
                continue;
            }
            let customer = Database::create_customer(conn, &details("Guest")).unwrap();
            Database::create_reservation(
                conn,
                date,
                PartySize::try_from(1).unwrap(),
                TableId::new(*table),
                customer.id(),
            )
            .unwrap();
        }

        let party = PartySize::try_from(persons).unwrap();
        let smallest = AvailabilityResolver::new(conn, TableSelection::SmallestFit)
            .find_table(date, party)
            .unwrap();
        let by_id = AvailabilityResolver::new(conn, TableSelection::FirstById)
            .find_table(date, party)
            .unwrap();

        prop_assert_eq!(smallest.is_some(), by_id.is_some());
        if let (Some(smallest), Some(by_id)) = (smallest, by_id) {
            prop_assert!(smallest.capacity() <= by_id.capacity());
        }
    }
}
