use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add { code, name, admin } => {
                let emp = pool.in_transaction(|tx| {
                    let emp = EmployeeLogic::register(tx, code, name, *admin)?;
                    ttlog(
                        tx,
                        "employee",
                        &format!("employee {}", emp.code),
                        &format!("Registered {} ({})", emp.name, emp.role_str()),
                    )?;
                    Ok(emp)
                })?;

                success(format!(
                    "Employee {} registered with id {} ({}).",
                    emp.code,
                    emp.id,
                    emp.role_str()
                ));
            }

            EmployeeAction::Show { code } => {
                let emp = EmployeeLogic::by_code(&pool.conn, code)?;
                println!("{} {}", bold("Code:"), emp.code);
                println!("{} {}", bold("Name:"), emp.name);
                println!("{} {}", bold("Id:  "), emp.id);
                println!("{} {}", bold("Role:"), emp.role_str());
            }
        }
    }

    Ok(())
}
