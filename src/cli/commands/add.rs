use crate::Status;
use crate::cli::commands::print_outcome;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::report::{Outcome, ReportLogic};
use crate::db::log::log_report;
use crate::db::pool::DbPool;
use crate::db::repository::SqliteReportRepository;
use crate::errors::{AppError, AppResult};
use crate::models::report::Report;
use crate::utils::date;
use crate::utils::time::parse_optional_datetime;

/// Submit a new daily report.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<Status> {
    if let Commands::Add {
        date,
        title,
        content,
        clock_in,
        clock_out,
        json,
    } = &cli.command
    {
        //
        // 1. Parse date (mandatory) and timestamps (optional)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let clock_in = parse_optional_datetime(clock_in.as_ref(), d)?;
        let clock_out = parse_optional_datetime(clock_out.as_ref(), d)?;

        //
        // 2. Open DB and resolve who is acting
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let acting = EmployeeLogic::resolve_acting(
            &pool.conn,
            cli.acting.as_deref(),
            cfg.employee.as_deref(),
        )?;

        let candidate = Report::new(
            acting.id,
            d,
            title.clone(),
            content.clone(),
            clock_in,
            clock_out,
        );

        //
        // 3. Validate + persist as one unit of work
        //
        let outcome = pool.in_transaction(|tx| {
            let mut repo = SqliteReportRepository::new(tx);
            let outcome = ReportLogic::create(&mut repo, candidate, &acting)?;

            if let Outcome::Saved(r) = &outcome {
                log_report(tx, "add", r)?;
            }
            Ok(outcome)
        })?;

        return print_outcome(&outcome, *json, "created");
    }

    Ok(Status::Done)
}
