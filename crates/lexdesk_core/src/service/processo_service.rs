//! Process use-case service.
//!
//! # Responsibility
//! - Provide the call surface the presentation layer consumes.
//! - Delegate persistence to the store contract.
//!
//! # Invariants
//! - `ensure_schema` must be called once before CRUD is guaranteed to work
//!   against a fresh database.
//! - The service stays storage-agnostic.

use crate::model::processo::{Processo, ProcessoDraft, ProcessoId, StatusProcesso};
use crate::repo::processo_repo::{ProcessoFilter, ProcessoStore, StoreResult};
use std::collections::HashMap;

/// Use-case wrapper over a process store implementation.
pub struct ProcessoService<S: ProcessoStore> {
    store: S,
}

impl<S: ProcessoStore> ProcessoService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Ensures the `processos` table exists. Idempotent.
    pub fn ensure_schema(&self) -> StoreResult<()> {
        self.store.ensure_schema()
    }

    /// Records a new process; the store assigns the id.
    pub fn add(&self, draft: &ProcessoDraft) -> StoreResult<()> {
        self.store.add(draft)
    }

    /// Lists processes matching the filter; both criteria are optional and
    /// combine with AND.
    pub fn find(&self, filter: &ProcessoFilter) -> StoreResult<Vec<Processo>> {
        self.store.find(filter)
    }

    /// Lists every process on file.
    pub fn list_all(&self) -> StoreResult<Vec<Processo>> {
        self.store.find(&ProcessoFilter::all())
    }

    /// Sets the status text on one process, verbatim; missing ids no-op.
    pub fn update_status(&self, id: ProcessoId, new_status: &str) -> StoreResult<()> {
        self.store.update_status(id, new_status)
    }

    /// Sets a canonical status on one process.
    pub fn update_status_canonical(
        &self,
        id: ProcessoId,
        status: StatusProcesso,
    ) -> StoreResult<()> {
        self.store.update_status(id, status.as_str())
    }

    /// Deletes one process; missing ids no-op.
    pub fn delete(&self, id: ProcessoId) -> StoreResult<()> {
        self.store.delete(id)
    }

    /// Returns per-status counts; statuses with zero rows are absent.
    pub fn count_by_status(&self) -> StoreResult<HashMap<String, i64>> {
        self.store.count_by_status()
    }

    /// Returns the count for one status, defaulting a missing key to 0.
    pub fn count_for(&self, status: &str) -> StoreResult<i64> {
        Ok(self
            .store
            .count_by_status()?
            .get(status)
            .copied()
            .unwrap_or(0))
    }
}
