#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// 2025-01-01T00:00:00Z
pub const T0: i64 = 1_735_689_600_000;
pub const HOUR_MS: i64 = 3_600_000;

pub fn rsu() -> Command {
    cargo_bin_cmd!("rsupply")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsupply.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsupply_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `init` in test mode (no config file written).
pub fn init_db(db_path: &str) {
    rsu()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and add two rows at T0:
/// - "Water": 10/h, 240 in stock
/// - "Fuel": 0/h, 50 in stock
pub fn init_db_with_rows(db_path: &str) {
    init_db(db_path);
    let now = T0.to_string();

    rsu()
        .args([
            "--db", db_path, "--now-ms", &now, "add", "Water", "--rate", "10", "--inventory",
            "240",
        ])
        .assert()
        .success();

    rsu()
        .args([
            "--db", db_path, "--now-ms", &now, "add", "Fuel", "--rate", "0", "--inventory", "50",
        ])
        .assert()
        .success();
}
