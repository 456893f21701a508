use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::repository::ReportRepository;
use crate::db::pool::DbPool;
use crate::db::repository::SqliteReportRepository;
use crate::errors::{AppError, AppResult};
use crate::models::report::Report;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, date, json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let repo = SqliteReportRepository::new(&pool.conn);

        let found = match (id, date) {
            (Some(id), _) => repo.find_by_id(*id)?,
            (None, Some(d)) => {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                repo.find_by_date(d)?
            }
            (None, None) => None,
        };

        let Some(report) = found else {
            info("No report found.");
            return Ok(());
        };

        if *json {
            let text = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Serialize(e.to_string()))?;
            println!("{}", text);
        } else {
            print_report(&report, cfg.separator());
        }
    }

    Ok(())
}

fn print_report(r: &Report, separator: char) {
    header(format!("Report #{} ({})", r.id, r.date_str()));

    let worked = r
        .worked_minutes()
        .map(mins2readable)
        .unwrap_or_else(|| "--:--".to_string());

    let mut table = Table::new(vec![Column::new("FIELD", 10), Column::new("VALUE", 40)], separator);
    table.add_row(vec!["employee".into(), r.employee_id.to_string()]);
    table.add_row(vec!["title".into(), r.title.clone()]);
    table.add_row(vec!["clock-in".into(), colorize_optional(&r.clock_in_str())]);
    table.add_row(vec!["clock-out".into(), colorize_optional(&r.clock_out_str())]);
    table.add_row(vec!["worked".into(), colorize_optional(&worked)]);
    print!("{}", table.render());

    println!("\n{}", r.content);
}
