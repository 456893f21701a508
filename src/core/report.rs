use crate::core::repository::ReportRepository;
use crate::core::validator::ReportValidator;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::report::{DayOffset, Report};
use crate::models::validation::ValidationError;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Result of a create/update request that did not fail fatally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validation passed and the report was written.
    Saved(Report),
    /// Validation failed; nothing was written.
    Rejected(Vec<ValidationError>),
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }

    /// Validation failures, empty when the report was saved.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Outcome::Saved(_) => &[],
            Outcome::Rejected(errors) => errors,
        }
    }

    pub fn saved(&self) -> Option<&Report> {
        match self {
            Outcome::Saved(r) => Some(r),
            Outcome::Rejected(_) => None,
        }
    }
}

/// High-level business logic for creating and editing reports.
pub struct ReportLogic;

impl ReportLogic {
    /// Validate and, if clean, insert a new report.
    pub fn create<R: ReportRepository>(
        repo: &mut R,
        mut candidate: Report,
        acting: &Employee,
    ) -> AppResult<Outcome> {
        candidate.id = 0;

        let enforce = date_taken_on_create(repo, &candidate)?;
        let (previous, next) = neighbors(repo, &candidate)?;

        let errors =
            ReportValidator::validate(&candidate, previous.as_ref(), next.as_ref(), acting, enforce);
        if !errors.is_empty() {
            return Ok(Outcome::Rejected(errors));
        }

        let now = now();
        candidate.created_at = Some(now);
        candidate.updated_at = Some(now);

        let saved = repo.save(&candidate)?;
        Ok(Outcome::Saved(saved))
    }

    /// Validate and, if clean, overwrite the stored report `candidate.id`.
    ///
    /// The owner and `created_at` always come from the stored record.
    pub fn update<R: ReportRepository>(
        repo: &mut R,
        mut candidate: Report,
        acting: &Employee,
    ) -> AppResult<Outcome> {
        let stored = repo
            .find_by_id(candidate.id)?
            .ok_or(AppError::NotFound(candidate.id))?;

        candidate.id = stored.id;
        candidate.employee_id = stored.employee_id;
        candidate.created_at = stored.created_at;

        let enforce = date_taken_on_update(repo, &stored, candidate.report_date)?;
        let (previous, next) = neighbors(repo, &candidate)?;

        let errors =
            ReportValidator::validate(&candidate, previous.as_ref(), next.as_ref(), acting, enforce);
        if !errors.is_empty() {
            return Ok(Outcome::Rejected(errors));
        }

        candidate.updated_at = Some(now());

        let saved = repo.replace(stored.id, &candidate)?;
        Ok(Outcome::Saved(saved))
    }
}

/// A new report collides only with a report the same employee already
/// filed on that date. Other employees' reports on the date are fine.
fn date_taken_on_create<R: ReportRepository>(repo: &R, candidate: &Report) -> AppResult<bool> {
    if repo.count_by_date(candidate.report_date)? == 0 {
        return Ok(false);
    }

    let existing = repo.find_by_employee_and_date(candidate.employee_id, candidate.report_date)?;
    Ok(existing.is_some())
}

/// An edit collides only when the date moves onto a day where the owner
/// already has a different report. An unchanged date never collides with
/// itself; a free target date just moves the report.
fn date_taken_on_update<R: ReportRepository>(
    repo: &R,
    stored: &Report,
    new_date: NaiveDate,
) -> AppResult<bool> {
    if stored.report_date == new_date {
        return Ok(false);
    }

    if repo.count_by_date(new_date)? == 0 {
        return Ok(false);
    }

    let existing = repo.find_by_employee_and_date(stored.employee_id, new_date)?;
    Ok(existing.is_some_and(|other| other.id != stored.id))
}

/// Owner's reports on the day before and after the candidate's date.
/// The candidate's own stored row is never its own neighbor.
fn neighbors<R: ReportRepository>(
    repo: &R,
    candidate: &Report,
) -> AppResult<(Option<Report>, Option<Report>)> {
    let own_id = candidate.id;

    let previous = repo
        .find_by_date_offset(candidate.employee_id, candidate.report_date, DayOffset::Before)?
        .filter(|r| own_id == 0 || r.id != own_id);
    let next = repo
        .find_by_date_offset(candidate.employee_id, candidate.report_date, DayOffset::After)?
        .filter(|r| own_id == 0 || r.id != own_id);

    Ok((previous, next))
}

/// Local wall-clock time, truncated to whole seconds to match storage.
fn now() -> NaiveDateTime {
    let ts = Local::now().naive_local();
    ts.with_nanosecond(0).unwrap_or(ts)
}
