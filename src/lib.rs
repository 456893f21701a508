//! rDailyReport library root.
//! Exposes the CLI parser, the high-level run() function, and the report
//! validation core (`core::validator`, `core::report`).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// How a successfully dispatched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    /// A report failed validation; nothing was written.
    Rejected,
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<Status> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli).map(|_| Status::Done),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg).map(|_| Status::Done)
        }
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg).map(|_| Status::Done),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg).map(|_| Status::Done),
        Commands::Employee { .. } => {
            cli::commands::employee::handle(&cli.command, cfg).map(|_| Status::Done)
        }
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg).map(|_| Status::Done),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<Status> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_db_path(custom_db);
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
