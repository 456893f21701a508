use chrono::NaiveDate;
use rdailyreport::core::report::{Outcome, ReportLogic};
use rdailyreport::core::repository::ReportRepository;
use rdailyreport::errors::{AppError, AppResult};
use rdailyreport::models::report::{DayOffset, Report};
use rdailyreport::models::validation::ValidationError::*;

mod common;
use common::{d, dt, employee, report};

/// Vec-backed repository that counts writes.
#[derive(Default)]
struct MemoryRepo {
    reports: Vec<Report>,
    writes: usize,
}

impl ReportRepository for MemoryRepo {
    fn find_by_id(&self, id: i64) -> AppResult<Option<Report>> {
        Ok(self.reports.iter().find(|r| r.id == id).cloned())
    }

    fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> AppResult<Option<Report>> {
        Ok(self
            .reports
            .iter()
            .find(|r| r.employee_id == employee_id && r.report_date == date)
            .cloned())
    }

    fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<Report>> {
        Ok(self.reports.iter().find(|r| r.report_date == date).cloned())
    }

    fn find_by_date_offset(
        &self,
        employee_id: i64,
        date: NaiveDate,
        offset: DayOffset,
    ) -> AppResult<Option<Report>> {
        match offset.apply(date) {
            Some(day) => self.find_by_employee_and_date(employee_id, day),
            None => Ok(None),
        }
    }

    fn count_by_date(&self, date: NaiveDate) -> AppResult<i64> {
        Ok(self.reports.iter().filter(|r| r.report_date == date).count() as i64)
    }

    fn save(&mut self, report: &Report) -> AppResult<Report> {
        let mut stored = report.clone();
        stored.id = self.reports.len() as i64 + 1;
        self.reports.push(stored.clone());
        self.writes += 1;
        Ok(stored)
    }

    fn replace(&mut self, id: i64, report: &Report) -> AppResult<Report> {
        let slot = self
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound(id))?;
        *slot = report.clone();
        self.writes += 1;
        Ok(slot.clone())
    }
}

/// Every call fails as if the store were offline.
struct OfflineRepo;

fn offline<T>() -> AppResult<T> {
    Err(AppError::unavailable(rusqlite::Error::QueryReturnedNoRows))
}

impl ReportRepository for OfflineRepo {
    fn find_by_id(&self, _: i64) -> AppResult<Option<Report>> {
        offline()
    }
    fn find_by_employee_and_date(&self, _: i64, _: NaiveDate) -> AppResult<Option<Report>> {
        offline()
    }
    fn find_by_date(&self, _: NaiveDate) -> AppResult<Option<Report>> {
        offline()
    }
    fn find_by_date_offset(&self, _: i64, _: NaiveDate, _: DayOffset) -> AppResult<Option<Report>> {
        offline()
    }
    fn count_by_date(&self, _: NaiveDate) -> AppResult<i64> {
        offline()
    }
    fn save(&mut self, _: &Report) -> AppResult<Report> {
        offline()
    }
    fn replace(&mut self, _: i64, _: &Report) -> AppResult<Report> {
        offline()
    }
}

fn saved(outcome: AppResult<Outcome>) -> Report {
    match outcome.expect("no fatal error") {
        Outcome::Saved(r) => r,
        Outcome::Rejected(errors) => panic!("unexpected rejection: {:?}", errors),
    }
}

#[test]
fn test_create_persists_and_stamps_timestamps() {
    let mut repo = MemoryRepo::default();
    let candidate = report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00");

    let r = saved(ReportLogic::create(&mut repo, candidate, &employee(1)));

    assert_eq!(r.id, 1);
    assert!(r.created_at.is_some());
    assert_eq!(r.created_at, r.updated_at);
    assert_eq!(repo.reports.len(), 1);
}

#[test]
fn test_rejected_create_writes_nothing() {
    let mut repo = MemoryRepo::default();
    let mut candidate = report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00");
    candidate.title.clear();

    let outcome = ReportLogic::create(&mut repo, candidate, &employee(1)).unwrap();

    assert_eq!(outcome.errors(), &[MissingTitle]);
    assert!(!outcome.is_saved());
    assert_eq!(repo.writes, 0);
}

#[test]
fn test_second_report_same_employee_same_date_is_duplicate() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &me,
    ));

    let outcome = ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:30", "2024-01-10T17:00"),
        &me,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Rejected(vec![DuplicateReportDate]));
    assert_eq!(repo.reports.len(), 1);
}

#[test]
fn test_other_employee_may_report_on_same_date() {
    let mut repo = MemoryRepo::default();

    saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &employee(1),
    ));
    let r = saved(ReportLogic::create(
        &mut repo,
        report(2, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &employee(2),
    ));

    assert_eq!(r.id, 2);
    assert_eq!(repo.count_by_date(d("2024-01-10")).unwrap(), 2);
}

#[test]
fn test_create_checks_previous_day_overlap() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-09", "2024-01-09T20:00", "2024-01-10T03:00"),
        &me,
    ));

    let outcome = ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T02:00", "2024-01-10T10:00"),
        &me,
    )
    .unwrap();

    assert_eq!(outcome.errors(), &[InvalidClockIn]);
}

#[test]
fn test_create_checks_next_day_overlap() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-11", "2024-01-11T06:00", "2024-01-11T14:00"),
        &me,
    ));

    let outcome = ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T22:00", "2024-01-11T07:00"),
        &me,
    )
    .unwrap();
    assert_eq!(outcome.errors(), &[InvalidClockOut]);

    // ending exactly when the next shift starts is fine
    saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T22:00", "2024-01-11T06:00"),
        &me,
    ));
}

#[test]
fn test_update_with_unchanged_date_never_conflicts_with_itself() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    let created = saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &me,
    ));

    let mut edit = created.clone();
    edit.title = "Daily (revised)".into();
    let updated = saved(ReportLogic::update(&mut repo, edit, &me));

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Daily (revised)");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_update_onto_own_existing_date_is_duplicate() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &me,
    ));
    let second = saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-15", "2024-01-15T09:00", "2024-01-15T18:00"),
        &me,
    ));

    let mut moved = second.clone();
    moved.report_date = d("2024-01-10");
    moved.clock_in = Some(dt("2024-01-10T09:00"));
    moved.clock_out = Some(dt("2024-01-10T18:00"));

    let outcome = ReportLogic::update(&mut repo, moved, &me).unwrap();

    assert_eq!(outcome.errors(), &[DuplicateReportDate]);
    assert_eq!(repo.find_by_id(second.id).unwrap().unwrap(), second);
}

#[test]
fn test_update_onto_free_date_moves_the_report() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    // someone else already reported on the target date
    saved(ReportLogic::create(
        &mut repo,
        report(2, "2024-01-20", "2024-01-20T09:00", "2024-01-20T18:00"),
        &employee(2),
    ));
    let mine = saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &me,
    ));

    let mut moved = mine.clone();
    moved.report_date = d("2024-01-20");
    moved.clock_in = Some(dt("2024-01-20T09:00"));
    moved.clock_out = Some(dt("2024-01-20T18:00"));

    let r = saved(ReportLogic::update(&mut repo, moved, &me));
    assert_eq!(r.report_date, d("2024-01-20"));
}

#[test]
fn test_update_to_adjacent_day_ignores_its_own_old_row() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    let mine = saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T23:00"),
        &me,
    ));

    let mut moved = mine.clone();
    moved.report_date = d("2024-01-11");
    moved.clock_in = Some(dt("2024-01-11T08:00"));
    moved.clock_out = Some(dt("2024-01-11T17:00"));

    let r = saved(ReportLogic::update(&mut repo, moved, &me));
    assert_eq!(r.report_date, d("2024-01-11"));
}

#[test]
fn test_update_keeps_owner_and_creation_time() {
    let mut repo = MemoryRepo::default();

    let created = saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &employee(1),
    ));

    let mut edit = created.clone();
    edit.employee_id = 7;
    edit.created_at = None;

    // an administrator edits someone else's report
    let r = saved(ReportLogic::update(&mut repo, edit, &employee(2)));
    assert_eq!(r.employee_id, 1);
    assert_eq!(r.created_at, created.created_at);
}

#[test]
fn test_rejected_update_leaves_stored_report_untouched() {
    let mut repo = MemoryRepo::default();
    let me = employee(1);

    let created = saved(ReportLogic::create(
        &mut repo,
        report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00"),
        &me,
    ));
    let writes = repo.writes;

    let mut edit = created.clone();
    edit.clock_in = Some(dt("2024-01-10T19:00"));
    let outcome = ReportLogic::update(&mut repo, edit, &me).unwrap();

    assert_eq!(outcome.errors(), &[ClockOrderInverted]);
    assert_eq!(repo.writes, writes);
    assert_eq!(repo.find_by_id(created.id).unwrap().unwrap(), created);
}

#[test]
fn test_update_of_unknown_id_is_not_found() {
    let mut repo = MemoryRepo::default();
    let mut candidate = report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00");
    candidate.id = 99;

    let err = ReportLogic::update(&mut repo, candidate, &employee(1)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(99)));
}

#[test]
fn test_repository_failures_are_fatal() {
    let candidate = report(1, "2024-01-10", "2024-01-10T09:00", "2024-01-10T18:00");

    let err = ReportLogic::create(&mut OfflineRepo, candidate.clone(), &employee(1)).unwrap_err();
    assert!(matches!(err, AppError::RepositoryUnavailable(_)));

    let err = ReportLogic::update(&mut OfflineRepo, candidate, &employee(1)).unwrap_err();
    assert!(matches!(err, AppError::RepositoryUnavailable(_)));
}
