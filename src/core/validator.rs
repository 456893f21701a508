//! Report validation engine.
//!
//! Pure rules over a candidate report and its adjacent-day neighbors.
//! Nothing here touches the database: whether the date-uniqueness rule
//! applies is decided by the caller (`ReportLogic`) and passed in.

use crate::models::employee::Employee;
use crate::models::report::{DayOffset, Report};
use crate::models::validation::ValidationError;

pub struct ReportValidator;

impl ReportValidator {
    /// Run every check and collect the failures.
    ///
    /// Checks never short-circuit each other, so the caller can show all
    /// problems at once. Order of the returned list is fixed:
    /// date uniqueness, title, clock-in, clock-out, clock ordering, content.
    pub fn validate(
        candidate: &Report,
        previous: Option<&Report>,
        next: Option<&Report>,
        acting: &Employee,
        enforce_date_uniqueness: bool,
    ) -> Vec<ValidationError> {
        [
            check_date_uniqueness(enforce_date_uniqueness),
            check_title(&candidate.title),
            check_clock_in(candidate, previous, acting),
            check_clock_out(candidate, next, acting),
            check_clock_order(candidate),
            check_content(&candidate.content),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn check_date_uniqueness(enforce: bool) -> Option<ValidationError> {
    enforce.then_some(ValidationError::DuplicateReportDate)
}

fn check_title(title: &str) -> Option<ValidationError> {
    title.is_empty().then_some(ValidationError::MissingTitle)
}

fn check_content(content: &str) -> Option<ValidationError> {
    content.is_empty().then_some(ValidationError::MissingContent)
}

/// A shift must start on its own report date and not before the acting
/// employee's previous shift ended.
fn check_clock_in(
    candidate: &Report,
    previous: Option<&Report>,
    acting: &Employee,
) -> Option<ValidationError> {
    let Some(clock_in) = candidate.clock_in else {
        return Some(ValidationError::InvalidClockIn);
    };

    if let Some(prev) = previous
        && acting.owns(prev.employee_id)
        && let Some(prev_out) = prev.clock_out
        && clock_in < prev_out
    {
        return Some(ValidationError::InvalidClockIn);
    }

    if clock_in.date() != candidate.report_date {
        return Some(ValidationError::InvalidClockIn);
    }

    None
}

/// A shift may end on its report date or run past midnight into the next
/// day, but must not end after the acting employee's next shift started.
fn check_clock_out(
    candidate: &Report,
    next: Option<&Report>,
    acting: &Employee,
) -> Option<ValidationError> {
    let Some(clock_out) = candidate.clock_out else {
        return Some(ValidationError::InvalidClockOut);
    };

    if let Some(nxt) = next
        && acting.owns(nxt.employee_id)
        && let Some(next_in) = nxt.clock_in
        && clock_out > next_in
    {
        return Some(ValidationError::InvalidClockOut);
    }

    let out_date = clock_out.date();
    let overnight = DayOffset::After.apply(candidate.report_date);
    if out_date != candidate.report_date && Some(out_date) != overnight {
        return Some(ValidationError::InvalidClockOut);
    }

    None
}

fn check_clock_order(candidate: &Report) -> Option<ValidationError> {
    match (candidate.clock_in, candidate.clock_out) {
        (Some(clock_in), Some(clock_out)) if clock_in > clock_out => {
            Some(ValidationError::ClockOrderInverted)
        }
        _ => None,
    }
}
