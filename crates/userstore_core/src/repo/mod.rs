//! Repository layer: the user store contract and its in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract consumed by the service layer.
//! - Own every stored `User` and the identifier generator.
//!
//! # Invariants
//! - Identifiers come from one atomic counter; they are never reused.
//! - Lookups return snapshots; not-found is `None`, never an error.

pub mod page;
pub mod user_repo;
