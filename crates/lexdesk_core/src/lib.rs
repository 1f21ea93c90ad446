//! Core data layer for LexDesk case management.
//! This crate owns the `processos` schema and every invariant around it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{DatabaseUrl, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::processo::{
    Processo, ProcessoDraft, ProcessoId, StatusParseError, StatusProcesso,
};
pub use repo::processo_repo::{
    ProcessoFilter, ProcessoStore, SqliteProcessoStore, StoreError, StoreResult,
};
pub use service::processo_service::ProcessoService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
