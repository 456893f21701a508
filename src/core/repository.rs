use crate::errors::AppResult;
use crate::models::report::{DayOffset, Report};
use chrono::NaiveDate;

/// Storage capability consumed by `ReportLogic`.
///
/// Lookups that find nothing return `Ok(None)`; `Err` is reserved for the
/// store itself failing (`AppError::RepositoryUnavailable`).
pub trait ReportRepository {
    fn find_by_id(&self, id: i64) -> AppResult<Option<Report>>;

    fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> AppResult<Option<Report>>;

    /// First report registered on `date`, whoever owns it.
    fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<Report>>;

    /// The employee's report dated one day before or after `date`.
    fn find_by_date_offset(
        &self,
        employee_id: i64,
        date: NaiveDate,
        offset: DayOffset,
    ) -> AppResult<Option<Report>>;

    fn count_by_date(&self, date: NaiveDate) -> AppResult<i64>;

    /// Insert a new report and return it with its assigned id.
    ///
    /// `created_at` and `updated_at` must already be stamped; the SQLite
    /// store rejects a report without them.
    fn save(&mut self, report: &Report) -> AppResult<Report>;

    /// Overwrite the stored report `id` and return the stored value.
    fn replace(&mut self, id: i64, report: &Report) -> AppResult<Report>;
}
