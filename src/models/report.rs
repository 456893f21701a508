use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,                           // ⇔ reports.id (0 until persisted)
    pub employee_id: i64,                  // ⇔ reports.employee_id (owner, immutable)
    pub report_date: NaiveDate,            // ⇔ reports.report_date (TEXT "YYYY-MM-DD")
    pub title: String,                     // ⇔ reports.title
    pub content: String,                   // ⇔ reports.content
    pub clock_in: Option<NaiveDateTime>,   // ⇔ reports.clock_in (TEXT ISO8601)
    pub clock_out: Option<NaiveDateTime>,  // ⇔ reports.clock_out (TEXT ISO8601)
    pub created_at: Option<NaiveDateTime>, // stamped by ReportLogic
    pub updated_at: Option<NaiveDateTime>, // stamped by ReportLogic
}

impl Report {
    /// Build an unsaved report as submitted by a caller.
    /// - `id = 0` (assigned on persist)
    /// - `created_at` / `updated_at` left empty, the service stamps them
    pub fn new(
        employee_id: i64,
        report_date: NaiveDate,
        title: impl Into<String>,
        content: impl Into<String>,
        clock_in: Option<NaiveDateTime>,
        clock_out: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            report_date,
            title: title.into(),
            content: content.into(),
            clock_in,
            clock_out,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.report_date.format("%Y-%m-%d").to_string()
    }

    pub fn clock_in_str(&self) -> String {
        fmt_stamp(self.clock_in)
    }

    pub fn clock_out_str(&self) -> String {
        fmt_stamp(self.clock_out)
    }

    /// Minutes between clock-in and clock-out, when both are set and ordered.
    pub fn worked_minutes(&self) -> Option<i64> {
        match (self.clock_in, self.clock_out) {
            (Some(i), Some(o)) if i <= o => Some((o - i).num_minutes()),
            _ => None,
        }
    }
}

fn fmt_stamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Which adjacent calendar day to look at when fetching a neighbor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    Before,
    After,
}

impl DayOffset {
    /// Shift `date` by one day. `None` only at the edges of chrono's calendar.
    pub fn apply(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            DayOffset::Before => date.checked_sub_days(Days::new(1)),
            DayOffset::After => date.checked_add_days(Days::new(1)),
        }
    }
}
