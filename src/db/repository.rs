//! SQLite implementation of `ReportRepository`.
//!
//! Borrows a connection, so it runs equally over a plain `Connection` or
//! inside a `rusqlite::Transaction` opened by `DbPool::in_transaction`.

use crate::core::repository::ReportRepository;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::report::{DayOffset, Report};
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct SqliteReportRepository<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteReportRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl ReportRepository for SqliteReportRepository<'_> {
    fn find_by_id(&self, id: i64) -> AppResult<Option<Report>> {
        queries::select_report_by_id(self.conn, id).map_err(AppError::unavailable)
    }

    fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> AppResult<Option<Report>> {
        queries::select_report_by_employee_and_date(self.conn, employee_id, &date)
            .map_err(AppError::unavailable)
    }

    fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<Report>> {
        queries::select_first_report_by_date(self.conn, &date).map_err(AppError::unavailable)
    }

    fn find_by_date_offset(
        &self,
        employee_id: i64,
        date: NaiveDate,
        offset: DayOffset,
    ) -> AppResult<Option<Report>> {
        match offset.apply(date) {
            Some(d) => self.find_by_employee_and_date(employee_id, d),
            None => Ok(None),
        }
    }

    fn count_by_date(&self, date: NaiveDate) -> AppResult<i64> {
        queries::count_reports_by_date(self.conn, &date).map_err(AppError::unavailable)
    }

    fn save(&mut self, report: &Report) -> AppResult<Report> {
        let id = queries::insert_report(self.conn, report).map_err(AppError::unavailable)?;
        self.find_by_id(id)?.ok_or(AppError::NotFound(id))
    }

    fn replace(&mut self, id: i64, report: &Report) -> AppResult<Report> {
        let changed =
            queries::update_report(self.conn, id, report).map_err(AppError::unavailable)?;
        if changed == 0 {
            return Err(AppError::NotFound(id));
        }
        self.find_by_id(id)?.ok_or(AppError::NotFound(id))
    }
}
