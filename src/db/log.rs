use crate::errors::AppResult;
use crate::models::report::Report;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal audit line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Audit a persisted report (`add` / `edit`).
pub fn log_report(conn: &Connection, operation: &str, report: &Report) -> AppResult<()> {
    ttlog(
        conn,
        operation,
        &format!("report #{}", report.id),
        &format!(
            "{} by employee {}: {}",
            report.date_str(),
            report.employee_id,
            report.title
        ),
    )
}
