//! Unified application error type.
//! Every fatal outcome (db, config, cli parsing) is an AppError.
//! Report validation failures are NOT errors: they are returned as data,
//! see `models::validation::ValidationError`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Report repository unavailable: {0}")]
    RepositoryUnavailable(#[source] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Report not found: {0}")]
    NotFound(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date/time format: {0}")]
    InvalidDateTime(String),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Employee code already registered: {0}")]
    DuplicateEmployeeCode(String),

    #[error("No acting employee: pass --as <CODE> or set `employee` in the configuration")]
    MissingEmployee,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Serialization error: {0}")]
    Serialize(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap a driver error raised while talking to the report store.
    pub fn unavailable(e: rusqlite::Error) -> Self {
        AppError::RepositoryUnavailable(e)
    }
}

pub type AppResult<T> = Result<T, AppError>;
