use crate::db::queries::{count_employees_by_code, find_employee_by_code, insert_employee};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use chrono::{Local, Timelike};
use rusqlite::Connection;

/// Minimal roster operations: the report core only needs to know who is acting.
pub struct EmployeeLogic;

impl EmployeeLogic {
    /// Register a new employee. Codes are unique across the roster,
    /// deleted employees included.
    pub fn register(conn: &Connection, code: &str, name: &str, admin: bool) -> AppResult<Employee> {
        let code = code.trim();
        let name = name.trim();

        if code.is_empty() || name.is_empty() {
            return Err(AppError::Other(
                "Employee code and name must not be empty.".into(),
            ));
        }

        if count_employees_by_code(conn, code)? > 0 {
            return Err(AppError::DuplicateEmployeeCode(code.to_string()));
        }

        let ts = Local::now().naive_local();
        let now = ts.with_nanosecond(0).unwrap_or(ts);

        let mut emp = Employee::new(0, code, name, admin);
        emp.created_at = Some(now);
        emp.updated_at = Some(now);
        emp.id = insert_employee(conn, &emp)?;

        Ok(emp)
    }

    /// Find the active employee behind `code`.
    pub fn by_code(conn: &Connection, code: &str) -> AppResult<Employee> {
        find_employee_by_code(conn, code)?
            .ok_or_else(|| AppError::EmployeeNotFound(code.to_string()))
    }

    /// Resolve the acting employee: explicit `--as` first, then the
    /// configured default.
    pub fn resolve_acting(
        conn: &Connection,
        cli_code: Option<&str>,
        cfg_code: Option<&str>,
    ) -> AppResult<Employee> {
        let code = cli_code.or(cfg_code).ok_or(AppError::MissingEmployee)?;
        Self::by_code(conn, code)
    }
}
