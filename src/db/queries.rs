use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::report::Report;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// `reports.report_date` storage format.
pub const DATE_FMT: &str = "%Y-%m-%d";
/// `clock_in`, `clock_out`, `created_at`, `updated_at` storage format.
pub const STAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S";

const REPORT_COLUMNS: &str = "id, employee_id, report_date, title, content, \
                              clock_in, clock_out, created_at, updated_at";

const EMPLOYEE_COLUMNS: &str = "id, code, name, admin_flag, delete_flag, created_at, updated_at";

fn conversion_failure(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_date_col(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT)
        .map_err(|_| conversion_failure(AppError::InvalidDate(s.to_string())))
}

fn parse_stamp_col(s: Option<String>) -> Result<Option<NaiveDateTime>> {
    match s {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(&s, STAMP_FMT)
            .map(Some)
            .map_err(|_| conversion_failure(AppError::InvalidDateTime(s))),
    }
}

fn fmt_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

fn fmt_stamp(ts: Option<NaiveDateTime>) -> Option<String> {
    ts.map(|t| t.format(STAMP_FMT).to_string())
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub fn map_report_row(row: &Row) -> Result<Report> {
    let date_str: String = row.get("report_date")?;

    Ok(Report {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        report_date: parse_date_col(&date_str)?,
        title: row.get("title")?,
        content: row.get("content")?,
        clock_in: parse_stamp_col(row.get("clock_in")?)?,
        clock_out: parse_stamp_col(row.get("clock_out")?)?,
        created_at: parse_stamp_col(row.get("created_at")?)?,
        updated_at: parse_stamp_col(row.get("updated_at")?)?,
    })
}

pub fn select_report_by_id(conn: &Connection, id: i64) -> Result<Option<Report>> {
    let mut stmt =
        conn.prepare_cached(&format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?1"))?;
    stmt.query_row([id], map_report_row).optional()
}

pub fn select_report_by_employee_and_date(
    conn: &Connection,
    employee_id: i64,
    date: &NaiveDate,
) -> Result<Option<Report>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {REPORT_COLUMNS} FROM reports
         WHERE employee_id = ?1 AND report_date = ?2
         ORDER BY id ASC
         LIMIT 1"
    ))?;
    stmt.query_row(params![employee_id, fmt_date(date)], map_report_row)
        .optional()
}

/// First report (lowest id) registered on `date`, any owner.
pub fn select_first_report_by_date(conn: &Connection, date: &NaiveDate) -> Result<Option<Report>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {REPORT_COLUMNS} FROM reports
         WHERE report_date = ?1
         ORDER BY id ASC
         LIMIT 1"
    ))?;
    stmt.query_row([fmt_date(date)], map_report_row).optional()
}

pub fn count_reports_by_date(conn: &Connection, date: &NaiveDate) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM reports WHERE report_date = ?1",
        [fmt_date(date)],
        |row| row.get(0),
    )
}

pub fn count_reports(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
}

/// Insert a report (its `id` is ignored) and return the new row id.
pub fn insert_report(conn: &Connection, r: &Report) -> Result<i64> {
    conn.execute(
        "INSERT INTO reports (employee_id, report_date, title, content,
                              clock_in, clock_out, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            r.employee_id,
            fmt_date(&r.report_date),
            r.title,
            r.content,
            fmt_stamp(r.clock_in),
            fmt_stamp(r.clock_out),
            fmt_stamp(r.created_at),
            fmt_stamp(r.updated_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update every mutable column of report `id`. The owner never changes.
/// Returns the number of affected rows (0 when `id` does not exist).
pub fn update_report(conn: &Connection, id: i64, r: &Report) -> Result<usize> {
    conn.execute(
        "UPDATE reports
         SET report_date = ?1, title = ?2, content = ?3,
             clock_in = ?4, clock_out = ?5,
             created_at = ?6, updated_at = ?7
         WHERE id = ?8",
        params![
            fmt_date(&r.report_date),
            r.title,
            r.content,
            fmt_stamp(r.clock_in),
            fmt_stamp(r.clock_out),
            fmt_stamp(r.created_at),
            fmt_stamp(r.updated_at),
            id,
        ],
    )
}

/// Earliest and latest report date, if any report exists.
pub fn report_date_range(conn: &Connection) -> Result<Option<(String, String)>> {
    conn.query_row(
        "SELECT MIN(report_date), MAX(report_date) FROM reports",
        [],
        |row| {
            let first: Option<String> = row.get(0)?;
            let last: Option<String> = row.get(1)?;
            Ok(first.zip(last))
        },
    )
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        code: row.get("code")?,
        name: row.get("name")?,
        admin: row.get::<_, i32>("admin_flag")? == 1,
        deleted: row.get::<_, i32>("delete_flag")? == 1,
        created_at: parse_stamp_col(row.get("created_at")?)?,
        updated_at: parse_stamp_col(row.get("updated_at")?)?,
    })
}

pub fn insert_employee(conn: &Connection, e: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (code, name, admin_flag, delete_flag, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            e.code,
            e.name,
            if e.admin { 1 } else { 0 },
            if e.deleted { 1 } else { 0 },
            fmt_stamp(e.created_at),
            fmt_stamp(e.updated_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Active (not deleted) employee with the given code.
pub fn find_employee_by_code(conn: &Connection, code: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE code = ?1 AND delete_flag = 0"
    ))?;
    Ok(stmt.query_row([code], map_employee_row).optional()?)
}

/// How many employees (deleted ones included) hold `code`.
pub fn count_employees_by_code(conn: &Connection, code: &str) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM employees WHERE code = ?1",
        [code],
        |row| row.get(0),
    )?)
}

pub fn count_employees(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
}
