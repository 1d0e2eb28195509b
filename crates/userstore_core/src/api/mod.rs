//! Response shapes handed to the RPC boundary.
//!
//! # Responsibility
//! - Wrap service results in a uniform envelope with correlation metadata.
//! - Provide the health-check payload.
//!
//! # Invariants
//! - Every envelope carries a freshly generated request id.
//! - Timestamps serialize as RFC 3339 strings in UTC.

pub mod envelope;
