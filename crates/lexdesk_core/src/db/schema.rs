//! `processos` table DDL.
//!
//! # Responsibility
//! - Create the process table when absent.
//!
//! # Invariants
//! - The statement is idempotent; repeated calls leave exactly one table.
//! - `AUTOINCREMENT` keeps assigned ids monotonic so deleted ids are never
//!   reused.
//! - The table is never dropped or altered by application code.

use rusqlite::Connection;

const CREATE_PROCESSOS_SQL: &str = "CREATE TABLE IF NOT EXISTS processos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    numero_processo INTEGER NOT NULL,
    data TEXT NOT NULL,
    acao TEXT NOT NULL,
    instancia TEXT NOT NULL,
    fase TEXT NOT NULL,
    cliente TEXT NOT NULL,
    empresa TEXT NOT NULL,
    advogado TEXT NOT NULL,
    status TEXT NOT NULL
);";

/// Creates the `processos` table if it does not exist yet.
pub fn ensure_processos_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_PROCESSOS_SQL)
}
