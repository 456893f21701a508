pub mod add;
pub mod config;
pub mod db;
pub mod edit;
pub mod employee;
pub mod init;
pub mod log;
pub mod show;

use crate::Status;
use crate::core::report::Outcome;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, validation_errors};

/// Print a create/update outcome and map it to the process status.
pub(crate) fn print_outcome(outcome: &Outcome, json: bool, verb: &str) -> AppResult<Status> {
    if json {
        let body = serde_json::json!({
            "saved": outcome.is_saved(),
            "report": outcome.saved(),
            "errors": outcome.errors(),
        });
        let text =
            serde_json::to_string_pretty(&body).map_err(|e| AppError::Serialize(e.to_string()))?;
        println!("{}", text);
    } else {
        match outcome {
            Outcome::Saved(r) => success(format!(
                "Report #{} {} for {} ({} → {}).",
                r.id,
                verb,
                r.date_str(),
                r.clock_in_str(),
                r.clock_out_str()
            )),
            Outcome::Rejected(errors) => validation_errors(errors),
        }
    }

    Ok(if outcome.is_saved() {
        Status::Done
    } else {
        Status::Rejected
    })
}
