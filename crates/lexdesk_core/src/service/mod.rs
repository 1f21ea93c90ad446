//! Use-case services consumed by the presentation layer.
//!
//! # Responsibility
//! - Provide stable entry points over the store contract.
//!
//! # Invariants
//! - Services never bypass the store contract or add validation the store
//!   does not perform.

pub mod processo_service;
