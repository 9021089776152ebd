use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use assert_cmd::prelude::*;
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

static CLI_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn tablebook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tablebook").expect("failed to locate tablebook binary");
    cmd.args(["--data-dir", data_dir.path().to_str().unwrap()]);
    cmd
}

fn bench_date(offset: usize) -> String {
    NaiveDate::from_ymd_opt(2030, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset as u64))
        .unwrap()
        .to_string()
}

fn initialize_data_dir(data_dir: &TempDir) {
    let status = tablebook(data_dir)
        .args(["--quiet", "init"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to execute tablebook init");
    assert!(status.success(), "tablebook init command failed");
}

fn book(data_dir: &TempDir, date: &str) {
    let status = tablebook(data_dir)
        .args(["book", "--name", "Bench", "--contact", "555", "--date", date])
        .args(["--persons", "2"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to execute tablebook book");
    assert!(status.success(), "tablebook book command failed");
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd =
                Command::cargo_bin("tablebook").expect("failed to locate tablebook binary");
            let output = cmd.arg("--version").output().expect("failed to run tablebook");
            black_box(output);
        });
    });
}

fn bench_cli_book(c: &mut Criterion) {
    let data_dir = TempDir::new().expect("failed to create temp dir");
    initialize_data_dir(&data_dir);

    c.bench_function("cli_book", |b| {
        b.iter(|| {
            let counter = CLI_COUNTER.fetch_add(1, Ordering::Relaxed);
            let status = tablebook(&data_dir)
                .args(["book", "--name", "Bench", "--contact", "555"])
                .args(["--date", &bench_date(counter), "--persons", "4"])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .expect("failed to execute tablebook book");
            black_box(status.success());
        });
    });
}

fn bench_cli_upcoming(c: &mut Criterion) {
    c.bench_function("cli_upcoming", |b| {
        b.iter_batched(
            || {
                let data_dir = TempDir::new().expect("failed to create temp dir");
                initialize_data_dir(&data_dir);
                for i in 0..50 {
                    book(&data_dir, &bench_date(i));
                }
                data_dir
            },
            |data_dir| {
                let output = tablebook(&data_dir)
                    .args(["--format", "json", "upcoming", "--from", "2030-01-01"])
                    .output()
                    .expect("failed to execute tablebook upcoming");
                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_book,
    bench_cli_upcoming
);
criterion_main!(cli_benches);
