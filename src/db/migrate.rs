use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the roster table.
fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            code         TEXT NOT NULL UNIQUE,
            name         TEXT NOT NULL,
            admin_flag   INTEGER NOT NULL DEFAULT 0 CHECK(admin_flag IN (0,1)),
            delete_flag  INTEGER NOT NULL DEFAULT 0 CHECK(delete_flag IN (0,1)),
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `reports` table with the current schema (clock columns included).
fn create_reports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL REFERENCES employees(id),
            report_date  TEXT NOT NULL,
            title        TEXT NOT NULL,
            content      TEXT NOT NULL,
            clock_in     TEXT,
            clock_out    TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_date ON reports(report_date);
        "#,
    )?;
    Ok(())
}

/// Older databases stored reports without clock-in/clock-out.
fn migrate_add_clock_columns(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "reports", "clock_in")? {
        return Ok(());
    }

    warning("Adding 'clock_in' / 'clock_out' columns to reports table...");

    conn.execute_batch(
        r#"
        BEGIN;
        ALTER TABLE reports ADD COLUMN clock_in TEXT;
        ALTER TABLE reports ADD COLUMN clock_out TEXT;
        COMMIT;
        "#,
    )?;

    success("'clock_in' / 'clock_out' columns added.");
    Ok(())
}

/// Storage backstop for the one-report-per-employee-per-day rule.
fn migrate_unique_employee_date(conn: &Connection) -> Result<(), Error> {
    let version = "20251103_0002_unique_employee_report_date";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_reports_employee_date
         ON reports(employee_id, report_date);",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!(
                "Failed to add unique (employee_id, report_date) index, \
                 resolve duplicated reports first: {}",
                e
            )),
        )
    })?;

    mark_applied(
        conn,
        version,
        "Added unique index on reports(employee_id, report_date)",
    )?;

    success(format!(
        "Migration applied: {} → unique (employee, date) index on reports",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Roster
    if !table_exists(conn, "employees")? {
        create_employees_table(conn)?;
        success("Created employees table.");
    }

    // 3) Reports: fresh schema or upgrade of a legacy one
    if !table_exists(conn, "reports")? {
        create_reports_table(conn)?;
        success("Created reports table.");
    } else {
        migrate_add_clock_columns(conn)?;
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_reports_date ON reports(report_date);",
        )?;
    }

    // 4) Versioned migrations
    migrate_unique_employee_date(conn)?;

    Ok(())
}
