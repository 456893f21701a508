use serde::Serialize;
use thiserror::Error;

/// A user-correctable problem found in a submitted report.
///
/// These are business-rule answers returned as data, never raised as
/// `AppError`. The validator reports them in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("A report for this date has already been registered")]
    DuplicateReportDate,

    #[error("Please enter a title")]
    MissingTitle,

    #[error(
        "Clock-in is missing, is not on the report date, or overlaps the previous day's report"
    )]
    InvalidClockIn,

    #[error(
        "Clock-out is missing, is neither on the report date nor the day after, or overlaps the next day's report"
    )]
    InvalidClockOut,

    #[error("Clock-in must not be later than clock-out")]
    ClockOrderInverted,

    #[error("Please enter the content")]
    MissingContent,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::DuplicateReportDate => "duplicate_report_date",
            ValidationError::MissingTitle => "missing_title",
            ValidationError::InvalidClockIn => "invalid_clock_in",
            ValidationError::InvalidClockOut => "invalid_clock_out",
            ValidationError::ClockOrderInverted => "clock_order_inverted",
            ValidationError::MissingContent => "missing_content",
        }
    }
}
