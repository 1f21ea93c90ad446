//! Process store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide schema-ensure, CRUD and aggregation over the `processos` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Each operation opens a fresh connection, executes one statement, and
//!   releases the connection on every exit path.
//! - `status` values pass through verbatim; no canonical-set validation.
//! - Result ordering of `find` is database-default; callers must not depend
//!   on it.

use crate::db::{schema, DatabaseUrl, DbError};
use crate::model::processo::{Processo, ProcessoDraft, ProcessoId};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROCESSO_SELECT_SQL: &str = "SELECT
    id,
    numero_processo,
    data,
    acao,
    instancia,
    fase,
    cliente,
    empresa,
    advogado,
    status
FROM processos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error taxonomy.
#[derive(Debug)]
pub enum StoreError {
    /// The database could not be located or reached. Fatal, not retried.
    Connectivity(DbError),
    /// A statement failed in the driver (type or NOT NULL violations
    /// included); surfaced verbatim for the caller to present.
    Driver(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connectivity(err) => write!(f, "{err}"),
            Self::Driver(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connectivity(err) => Some(err),
            Self::Driver(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Connectivity(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Driver(value)
    }
}

/// Equality filter for listing process records.
///
/// Absent or empty criteria match every row for that column; present
/// criteria combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessoFilter {
    /// Client identifier (CPF/CNPJ), matched exactly.
    pub cliente: Option<String>,
    /// Status text, matched exactly against the stored value.
    pub status: Option<String>,
}

impl ProcessoFilter {
    /// Filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_cliente(cliente: impl Into<String>) -> Self {
        Self {
            cliente: Some(cliente.into()),
            ..Self::default()
        }
    }

    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }
}

/// Store interface for process record persistence.
pub trait ProcessoStore {
    /// Creates the `processos` table if absent. Idempotent; safe on every
    /// startup.
    fn ensure_schema(&self) -> StoreResult<()>;

    /// Inserts a new row with all nine fields; the store assigns `id`.
    ///
    /// No validation is performed; malformed dates or non-canonical status
    /// strings are accepted verbatim. Callers needing the assigned id must
    /// re-query.
    fn add(&self, draft: &ProcessoDraft) -> StoreResult<()>;

    /// Returns all records matching `filter`; empty result is not an error.
    fn find(&self, filter: &ProcessoFilter) -> StoreResult<Vec<Processo>>;

    /// Sets `status` on the row with `id`, verbatim.
    ///
    /// A missing id is a silent no-op success with zero rows affected.
    fn update_status(&self, id: ProcessoId, new_status: &str) -> StoreResult<()>;

    /// Removes the row with `id`; no-op when the id does not exist.
    fn delete(&self, id: ProcessoId) -> StoreResult<()>;

    /// Returns exact per-status row counts. Statuses with zero rows are
    /// absent from the map; callers default missing keys to 0.
    fn count_by_status(&self) -> StoreResult<HashMap<String, i64>>;
}

/// SQLite-backed process store opening one connection per operation.
pub struct SqliteProcessoStore {
    url: DatabaseUrl,
}

impl SqliteProcessoStore {
    /// Creates a store over an explicit connection factory.
    pub fn new(url: DatabaseUrl) -> Self {
        Self { url }
    }

    /// Creates a store configured from the `DATABASE_URL` environment
    /// variable.
    pub fn from_env() -> StoreResult<Self> {
        Ok(Self::new(DatabaseUrl::from_env()?))
    }

    fn connect(&self) -> StoreResult<Connection> {
        Ok(self.url.open()?)
    }
}

impl ProcessoStore for SqliteProcessoStore {
    fn ensure_schema(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        schema::ensure_processos_table(&conn)?;
        debug!("event=ensure_schema module=repo status=ok table=processos");
        Ok(())
    }

    fn add(&self, draft: &ProcessoDraft) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO processos (
                numero_processo,
                data,
                acao,
                instancia,
                fase,
                cliente,
                empresa,
                advogado,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                draft.numero_processo,
                draft.data.as_str(),
                draft.acao.as_str(),
                draft.instancia.as_str(),
                draft.fase.as_str(),
                draft.cliente.as_str(),
                draft.empresa.as_str(),
                draft.advogado.as_str(),
                draft.status.as_str(),
            ],
        )?;
        debug!(
            "event=processo_add module=repo status=ok numero_processo={}",
            draft.numero_processo
        );
        Ok(())
    }

    fn find(&self, filter: &ProcessoFilter) -> StoreResult<Vec<Processo>> {
        let conn = self.connect()?;

        // Incremental equality predicate; no joins, sorting or pagination.
        let mut sql = format!("{PROCESSO_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        // An empty criterion string counts as absent and matches every row.
        if let Some(cliente) = present(&filter.cliente) {
            sql.push_str(" AND cliente = ?");
            bind_values.push(Value::Text(cliente.to_string()));
        }
        if let Some(status) = present(&filter.status) {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status.to_string()));
        }

        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut processos = Vec::new();

        while let Some(row) = rows.next()? {
            processos.push(parse_processo_row(row)?);
        }

        debug!(
            "event=processo_find module=repo status=ok matches={}",
            processos.len()
        );
        Ok(processos)
    }

    fn update_status(&self, id: ProcessoId, new_status: &str) -> StoreResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE processos SET status = ?1 WHERE id = ?2;",
            params![new_status, id],
        )?;
        // Zero rows affected is deliberate no-op behavior, not an error.
        debug!(
            "event=processo_update_status module=repo status=ok id={} rows_affected={}",
            id, changed
        );
        Ok(())
    }

    fn delete(&self, id: ProcessoId) -> StoreResult<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM processos WHERE id = ?1;", params![id])?;
        debug!(
            "event=processo_delete module=repo status=ok id={} rows_affected={}",
            id, changed
        );
        Ok(())
    }

    fn count_by_status(&self) -> StoreResult<HashMap<String, i64>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT status, COUNT(*) FROM processos GROUP BY status;")?;
        let mut rows = stmt.query([])?;
        let mut counts = HashMap::new();

        while let Some(row) = rows.next()? {
            let status: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            counts.insert(status, count);
        }

        debug!(
            "event=processo_count_by_status module=repo status=ok distinct_statuses={}",
            counts.len()
        );
        Ok(counts)
    }
}

fn present(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

fn parse_processo_row(row: &Row<'_>) -> StoreResult<Processo> {
    Ok(Processo {
        id: row.get("id")?,
        numero_processo: row.get("numero_processo")?,
        data: row.get("data")?,
        acao: row.get("acao")?,
        instancia: row.get("instancia")?,
        fase: row.get("fase")?,
        cliente: row.get("cliente")?,
        empresa: row.get("empresa")?,
        advogado: row.get("advogado")?,
        status: row.get("status")?,
    })
}
