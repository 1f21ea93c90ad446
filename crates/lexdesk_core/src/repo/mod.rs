//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the process store contract used by service/presentation code.
//! - Isolate SQLite query details behind that contract.
//!
//! # Invariants
//! - Every operation opens its own connection via the factory and releases
//!   it before returning.
//! - Update/delete on a missing id completes as a silent no-op, never an
//!   error.

pub mod processo_repo;
