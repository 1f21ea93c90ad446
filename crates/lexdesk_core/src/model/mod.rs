//! Domain model for legal process records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store and callers.
//!
//! # Invariants
//! - `id` is store-assigned and immutable; it is never reused after deletion.
//! - Only `status` is mutated after creation, by design contract.

pub mod processo;
