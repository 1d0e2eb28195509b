//! Core use-case services.
//!
//! # Responsibility
//! - Expose caller-facing user verbs over the repository contract.
//! - Keep the RPC boundary decoupled from storage details.

pub mod user_service;
