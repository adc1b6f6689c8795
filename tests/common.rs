#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rovertime::models::day_record::DayRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rot() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Record with `HH:MM` clock times on the given date.
pub fn record(d: NaiveDate, entry: &str, exit: &str) -> DayRecord {
    let at = |s: &str| {
        chrono::NaiveTime::parse_from_str(s, "%H:%M")
            .ok()
            .map(|t| d.and_time(t))
    };
    DayRecord::with_times(d, at(entry), at(exit))
}

/// Initialize DB and add two days of March 2024 (one long, one short)
pub fn init_db_with_data(db_path: &str) {
    rot()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rot()
        .args([
            "--db",
            db_path,
            "add",
            "2024-03-04",
            "--in",
            "08:00",
            "--out",
            "17:00",
        ])
        .assert()
        .success();

    rot()
        .args([
            "--db",
            db_path,
            "add",
            "2024-03-05",
            "--in",
            "08:00",
            "--out",
            "14:00",
        ])
        .assert()
        .success();
}
