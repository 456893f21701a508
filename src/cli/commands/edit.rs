use crate::Status;
use crate::cli::commands::print_outcome;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::report::{Outcome, ReportLogic};
use crate::core::repository::ReportRepository;
use crate::db::log::log_report;
use crate::db::pool::DbPool;
use crate::db::repository::SqliteReportRepository;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_datetime;

/// Edit an existing report. Fields not given on the command line keep
/// their stored value.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<Status> {
    if let Commands::Edit {
        id,
        date,
        title,
        content,
        clock_in,
        clock_out,
        json,
    } = &cli.command
    {
        let new_date = match date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let acting = EmployeeLogic::resolve_acting(
            &pool.conn,
            cli.acting.as_deref(),
            cfg.employee.as_deref(),
        )?;

        let outcome = pool.in_transaction(|tx| {
            let mut repo = SqliteReportRepository::new(tx);

            let stored = repo.find_by_id(*id)?.ok_or(AppError::NotFound(*id))?;
            let mut candidate = stored.clone();

            // Bare HH:MM inputs resolve against the (possibly new) report date
            candidate.report_date = new_date.unwrap_or(stored.report_date);
            if let Some(t) = title {
                candidate.title = t.clone();
            }
            if let Some(c) = content {
                candidate.content = c.clone();
            }
            if let Some(ts) = parse_optional_datetime(clock_in.as_ref(), candidate.report_date)? {
                candidate.clock_in = Some(ts);
            }
            if let Some(ts) = parse_optional_datetime(clock_out.as_ref(), candidate.report_date)? {
                candidate.clock_out = Some(ts);
            }

            let outcome = ReportLogic::update(&mut repo, candidate, &acting)?;

            if let Outcome::Saved(r) = &outcome {
                log_report(tx, "edit", r)?;
            }
            Ok(outcome)
        })?;

        return print_outcome(&outcome, *json, "updated");
    }

    Ok(Status::Done)
}
