//! Exit code and error message tests.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_blank_name_is_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "--name", "   ", "--contact", "555"])
        .args(["--date", "2030-06-01", "--persons", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("'name'"));
}

#[test]
fn test_zero_persons_is_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "--name", "Alice", "--contact", "555"])
        .args(["--date", "2030-06-01", "--persons", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("'persons'"));
}

#[test]
fn test_party_over_configured_limit() {
    let env = TestEnv::new();
    env.write_config("max_party_size: 6\n");

    env.command()
        .args(["book", "--name", "Alice", "--contact", "555"])
        .args(["--date", "2030-06-01", "--persons", "7"])
        .assert()
        .code(4);
}

#[test]
fn test_rejected_booking_leaves_no_customer() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "--name", "", "--contact", "555"])
        .args(["--date", "2030-06-01", "--persons", "2"])
        .assert()
        .code(4);

    // validation runs before the store is touched
    assert!(!env.database_path().exists());
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let env = TestEnv::new();
    env.write_config("table_selection: random\n");

    env.command()
        .arg("tables")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_field_exits_with_config_code() {
    let env = TestEnv::new();
    env.write_config("seating_time: \"19:00\"\n");

    env.command().arg("tables").assert().code(7);
}

#[test]
fn test_non_numeric_reservation_id() {
    let env = TestEnv::new();

    env.command()
        .args(["cancel", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ID"));
}

#[test]
fn test_lock_timeout_exit_code() {
    let env = TestEnv::new();
    env.command().arg("tables").assert().success();

    let conn = rusqlite::Connection::open(env.database_path()).unwrap();
    conn.execute_batch("BEGIN IMMEDIATE").unwrap();

    env.command()
        .args(["--busy-timeout", "0", "book", "--name", "Alice", "--contact", "555"])
        .args(["--date", "2030-06-01", "--persons", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Timeout"));

    conn.execute_batch("ROLLBACK").unwrap();
}
