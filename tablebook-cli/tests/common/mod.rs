//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TABLEBOOK_ENV_VARS: &[&str] = &[
    "TABLEBOOK_DATA_DIR",
    "TABLEBOOK_BUSY_TIMEOUT",
    "TABLEBOOK_LOG_MODE",
    "TABLEBOOK_TABLE_SELECTION",
    "TABLEBOOK_MAX_PARTY_SIZE",
    "TABLEBOOK_MAX_TABLE_CAPACITY",
    "TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "TABLEBOOK_SEED_TABLES",
    "TABLEBOOK_OUTPUT_FORMAT",
];

/// Test environment with an isolated data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the tablebook data directory (created on first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("tablebook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command with no data directory flag and a scrubbed environment.
    ///
    /// `HOME` points into the temporary directory so the default
    /// `~/.tablebook` never touches the real home.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablebook").expect("Failed to find tablebook binary");
        for var in TABLEBOOK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd
    }

    /// A command with `--data-dir` set to this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("tablebook.db")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), content)
            .expect("Failed to write config");
    }

    /// Book a table and return stdout.
    ///
    /// # Panics
    /// Panics if the book command fails.
    pub fn book(&self, name: &str, date: &str, persons: u32) -> String {
        let output = self
            .command()
            .args(["book", "--name", name, "--contact", "555-0100"])
            .args(["--date", date, "--persons", &persons.to_string()])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Book a table with JSON output and return the assigned table id.
    pub fn book_table_id(&self, name: &str, date: &str, persons: u32) -> i64 {
        let output = self
            .command()
            .args(["--format", "json", "book", "--name", name, "--contact", "555-0100"])
            .args(["--date", date, "--persons", &persons.to_string()])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Book output is not JSON");
        json["reservation"]["table_id"]
            .as_i64()
            .expect("Missing table id")
    }

    /// Run a command with JSON output and parse stdout.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(["--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
