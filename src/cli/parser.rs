use clap::{Parser, Subcommand};

/// Command-line interface definition for rDailyReport
/// CLI application to file daily activity reports with SQLite
#[derive(Parser)]
#[command(
    name = "rdailyreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily report CLI: one validated activity report per employee per day, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as the employee with this code (overrides `employee` in the config)
    #[arg(global = true, long = "as", value_name = "CODE")]
    pub acting: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the employee roster
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Submit the daily report for a date
    Add {
        /// Report date (YYYY-MM-DD or `today`)
        date: String,

        #[arg(long = "title", default_value = "", help = "Report title")]
        title: String,

        #[arg(long = "content", default_value = "", help = "Report content")]
        content: String,

        /// Clock-in (YYYY-MM-DDTHH:MM, or HH:MM on the report date)
        #[arg(long = "in", help = "Clock-in timestamp")]
        clock_in: Option<String>,

        /// Clock-out (YYYY-MM-DDTHH:MM, or HH:MM on the report date)
        #[arg(long = "out", help = "Clock-out timestamp")]
        clock_out: Option<String>,

        #[arg(long = "json", help = "Print the outcome as JSON")]
        json: bool,
    },

    /// Edit an existing report; omitted fields keep their stored value
    Edit {
        /// Report id
        id: i64,

        #[arg(long = "date", help = "New report date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "title", help = "New title")]
        title: Option<String>,

        #[arg(long = "content", help = "New content")]
        content: Option<String>,

        #[arg(long = "in", help = "New clock-in timestamp")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "New clock-out timestamp")]
        clock_out: Option<String>,

        #[arg(long = "json", help = "Print the outcome as JSON")]
        json: bool,
    },

    /// Show one report by id or by date
    Show {
        /// Report id
        #[arg(required_unless_present = "date", conflicts_with = "date")]
        id: Option<i64>,

        #[arg(long = "date", help = "Show the first report filed on this date")]
        date: Option<String>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register a new employee
    Add {
        /// Unique employee code
        code: String,

        /// Display name
        name: String,

        #[arg(long = "admin", help = "Grant administrator role")]
        admin: bool,
    },

    /// Show an employee by code
    Show { code: String },
}
