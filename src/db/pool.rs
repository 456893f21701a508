//! SQLite connection wrapper (lightweight for CLI usage).

use crate::core::report::Outcome;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use rusqlite::{Connection, Result, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

/// Decides whether a unit of work that returned `Ok` gets committed.
pub trait Commit {
    fn should_commit(&self) -> bool {
        true
    }
}

/// Rejected reports leave the database untouched.
impl Commit for Outcome {
    fn should_commit(&self) -> bool {
        self.is_saved()
    }
}

impl Commit for Employee {}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::configure(conn)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn)
    }

    fn configure(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Run `func` as a single unit of work.
    ///
    /// Commits only when `func` returns `Ok` and the value agrees to be
    /// committed; every other path drops the transaction, which rolls back.
    pub fn in_transaction<T, F>(&mut self, func: F) -> AppResult<T>
    where
        T: Commit,
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let value = func(&tx)?;

        if value.should_commit() {
            tx.commit()?;
        } else {
            tx.rollback()?;
        }

        Ok(value)
    }
}
