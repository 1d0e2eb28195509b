//! Envelope and health-check payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_SUCCESS_MESSAGE: &str = "Success";
const HEALTHY_STATUS: &str = "Healthy";
const SERVER_NAME: &str = "userstore";

/// Uniform response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
    /// Correlation id, unique per response.
    pub request_id: String,
}

impl<T> ApiResponse<T> {
    fn stamped(success: bool, message: String, data: Option<T>) -> Self {
        Self {
            success,
            message,
            data,
            timestamp: Utc::now(),
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// Successful envelope with the default message.
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, DEFAULT_SUCCESS_MESSAGE)
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self::stamped(true, message.into(), Some(data))
    }

    /// Failed envelope; `data` is always `None`.
    pub fn error(message: impl Into<String>) -> Self {
        Self::stamped(false, message.into(), None)
    }

    /// Maps a not-found lookup into a success or error envelope.
    pub fn from_lookup(result: Option<T>, not_found_message: impl Into<String>) -> Self {
        match result {
            Some(data) => Self::success(data),
            None => Self::error(not_found_message),
        }
    }
}

/// Health-check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub protocol: String,
    pub server: String,
    pub version: String,
}

impl HealthCheckResponse {
    /// Reports a healthy server speaking `protocol`.
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            timestamp: Utc::now(),
            protocol: protocol.into(),
            server: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
