#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rdailyreport::db::initialize::init_db;
use rdailyreport::db::pool::DbPool;
use rdailyreport::models::employee::Employee;
use rdailyreport::models::report::Report;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdr() -> Command {
    cargo_bin_cmd!("rdailyreport")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdailyreport.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Init the DB through the CLI and register two employees: E001 and E002 (admin).
pub fn init_db_with_employees(db_path: &str) {
    rdr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rdr()
        .args(["--db", db_path, "employee", "add", "E001", "Alice"])
        .assert()
        .success();

    rdr()
        .args(["--db", db_path, "employee", "add", "E002", "Bob", "--admin"])
        .assert()
        .success();
}

/// Fresh in-memory database with the full schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("valid datetime")
}

pub fn employee(id: i64) -> Employee {
    Employee::new(id, format!("E{:03}", id), format!("Employee {}", id), false)
}

/// A report that passes every rule on its own.
pub fn report(employee_id: i64, date: &str, clock_in: &str, clock_out: &str) -> Report {
    Report::new(
        employee_id,
        d(date),
        "Daily",
        "Worked on X",
        Some(dt(clock_in)),
        Some(dt(clock_out)),
    )
}

/// `report()` with creation/update times already set, as the store requires.
pub fn stamped_report(employee_id: i64, date: &str, clock_in: &str, clock_out: &str) -> Report {
    let mut r = report(employee_id, date, clock_in, clock_out);
    let stamp = Some(d(date).and_hms_opt(12, 0, 0).expect("valid time"));
    r.created_at = stamp;
    r.updated_at = stamp;
    r
}
