//! SQLite connectivity for the process store.
//!
//! # Responsibility
//! - Resolve the database location from configuration (`DATABASE_URL`).
//! - Open one short-lived connection per store operation.
//! - Own the `processos` table DDL.
//!
//! # Invariants
//! - Every store operation opens, executes, and releases its own connection;
//!   no connection is reused across calls.
//! - Schema creation is idempotent and never drops or alters the table.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::DatabaseUrl;

pub type DbResult<T> = Result<T, DbError>;

/// Connectivity-class failures: the database cannot be located or reached.
///
/// These are fatal for the calling operation and are never retried.
#[derive(Debug)]
pub enum DbError {
    /// `DATABASE_URL` is not set in the process environment.
    MissingDatabaseUrl,
    /// `DATABASE_URL` is set but unusable (empty or malformed).
    InvalidDatabaseUrl(String),
    /// The driver failed to open or configure the connection.
    Open(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDatabaseUrl => {
                write!(f, "DATABASE_URL is not set in the process environment")
            }
            Self::InvalidDatabaseUrl(reason) => {
                write!(f, "DATABASE_URL is invalid: {reason}")
            }
            Self::Open(err) => write!(f, "failed to open database: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) => Some(err),
            Self::MissingDatabaseUrl | Self::InvalidDatabaseUrl(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Open(value)
    }
}
