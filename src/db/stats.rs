use crate::db::pool::DbPool;
use crate::db::queries;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let employees = queries::count_employees(&pool.conn)?;
    let reports = queries::count_reports(&pool.conn)?;
    println!("{}• Employees:{} {}{}{}", CYAN, RESET, GREEN, employees, RESET);
    println!("{}• Reports:{} {}{}{}", CYAN, RESET, GREEN, reports, RESET);

    //
    // 3) DATE RANGE
    //
    let range = queries::report_date_range(&pool.conn)?;
    let (fmt_first, fmt_last) = match &range {
        Some((f, l)) => (f.clone(), l.clone()),
        None => (format!("{GREY}--{RESET}"), format!("{GREY}--{RESET}")),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE REPORTS/DAY
    //
    if let Some((f, l)) = range {
        let d1 = parse_date(&f)?;
        let d2 = parse_date(&l)?;
        let days = (d2 - d1).num_days() + 1;

        let avg = reports as f64 / days as f64;
        println!("{}• Average reports/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

fn parse_date(date_str: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, queries::DATE_FMT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
