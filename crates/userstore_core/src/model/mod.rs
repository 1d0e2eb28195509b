//! Domain model for stored users.
//!
//! # Responsibility
//! - Define the canonical user record owned by the store.
//! - Define the caller-supplied candidate shape used by create/update/seed.
//!
//! # Invariants
//! - Every stored user is identified by a positive `UserId`.
//! - Deletion is a hard erase; identifiers are never handed out twice.

pub mod user;
