//! Connection factory for per-call SQLite access.
//!
//! # Responsibility
//! - Resolve `DATABASE_URL` into a concrete SQLite path.
//! - Open and configure a fresh connection on every call.
//!
//! # Invariants
//! - `open()` returns a connection with a 5s busy timeout configured.
//! - Connections are released by drop on every exit path, including errors.

use super::{DbError, DbResult};
use log::{error, info};
use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rusqlite::Connection;

const DATABASE_URL_VAR: &str = "DATABASE_URL";
const SQLITE_URL_PREFIX: &str = "sqlite://";
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolved database location acting as a connection factory.
///
/// The store deliberately opens a new connection per operation instead of
/// holding one open; this type is the explicit factory for that pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    path: PathBuf,
}

impl DatabaseUrl {
    /// Builds a factory from an explicit connection string.
    ///
    /// Accepts a plain filesystem path or a `sqlite://`-prefixed URL.
    ///
    /// # Errors
    /// - `DbError::InvalidDatabaseUrl` when the value is empty after
    ///   trimming and prefix stripping.
    pub fn new(url: impl AsRef<str>) -> DbResult<Self> {
        let trimmed = url.as_ref().trim();
        let path = trimmed.strip_prefix(SQLITE_URL_PREFIX).unwrap_or(trimmed);
        if path.is_empty() {
            return Err(DbError::InvalidDatabaseUrl(
                "connection string is empty".to_string(),
            ));
        }
        Ok(Self {
            path: PathBuf::from(path),
        })
    }

    /// Builds a factory from the `DATABASE_URL` environment variable.
    ///
    /// # Errors
    /// - `DbError::MissingDatabaseUrl` when the variable is unset.
    /// - `DbError::InvalidDatabaseUrl` when it is set but unusable.
    pub fn from_env() -> DbResult<Self> {
        match env::var(DATABASE_URL_VAR) {
            Ok(url) => Self::new(url),
            Err(env::VarError::NotPresent) => Err(DbError::MissingDatabaseUrl),
            Err(env::VarError::NotUnicode(_)) => Err(DbError::InvalidDatabaseUrl(
                "value is not valid UTF-8".to_string(),
            )),
        }
    }

    /// Opens a fresh connection to the configured database.
    ///
    /// # Side effects
    /// - Emits `db_open` logging events with duration and status.
    pub fn open(&self) -> DbResult<Connection> {
        let started_at = Instant::now();

        let conn = match Connection::open(&self.path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        if let Err(err) = conn.busy_timeout(BUSY_TIMEOUT) {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_configure_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }

        info!(
            "event=db_open module=db status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::DatabaseUrl;
    use crate::db::DbError;
    use std::path::Path;

    #[test]
    fn new_strips_sqlite_url_prefix() {
        let url = DatabaseUrl::new("sqlite:///tmp/lexdesk.db").unwrap();
        let plain = DatabaseUrl::new("/tmp/lexdesk.db").unwrap();
        assert_eq!(url, plain);
    }

    #[test]
    fn new_rejects_empty_connection_string() {
        let err = DatabaseUrl::new("   ").unwrap_err();
        assert!(matches!(err, DbError::InvalidDatabaseUrl(_)));
    }

    #[test]
    fn open_fails_with_connectivity_error_for_unreachable_path() {
        let missing_dir = Path::new("/nonexistent-lexdesk-dir/store.db");
        let url = DatabaseUrl::new(missing_dir.to_str().unwrap()).unwrap();
        let err = url.open().unwrap_err();
        assert!(matches!(err, DbError::Open(_)));
    }
}
