//! Core of the user store service.
//! Owns every user record and the rules for identifier allocation,
//! pagination and lookup; RPC handlers sit on top of `UserService`.

pub mod api;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use api::envelope::{ApiResponse, HealthCheckResponse};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingResult,
};
pub use model::user::{NewUser, User, UserId, UserValidationError};
pub use repo::page::{PageRequest, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
pub use repo::user_repo::{sample_users, InMemoryUserRepository, UserRepository};
pub use service::user_service::UserService;

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
