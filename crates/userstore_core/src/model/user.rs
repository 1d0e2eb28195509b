//! User domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the store, service and wire envelopes.
//! - Provide timestamp and email-matching helpers used by the store.
//!
//! # Invariants
//! - `id` is assigned by the store, positive, and immutable.
//! - `created_at` is set once; `updated_at >= created_at` always.
//! - `email` is stored verbatim and compared case-insensitively.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned user identifier. The generator starts at 1.
pub type UserId = i64;

/// Caller-supplied fields for creating or overwriting a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Stored user record.
///
/// Callers only ever hold copies; changes must go through
/// `UserRepository::update_user` to keep timestamps consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Serialized as an ISO-8601 / RFC 3339 string.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Record invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    NonPositiveId(UserId),
    UpdatedBeforeCreated {
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(id) => write!(f, "user id must be positive, got {id}"),
            Self::UpdatedBeforeCreated {
                created_at,
                updated_at,
            } => write!(
                f,
                "updated_at ({}) must not be earlier than created_at ({})",
                updated_at.to_rfc3339(),
                created_at.to_rfc3339()
            ),
        }
    }
}

impl Error for UserValidationError {}

impl User {
    /// Builds a fresh record with both timestamps set to "now".
    ///
    /// Only the store calls this; it owns identifier allocation.
    pub(crate) fn from_candidate(id: UserId, candidate: &NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites mutable fields and refreshes `updated_at`.
    pub(crate) fn apply(&mut self, candidate: &NewUser) {
        self.name.clone_from(&candidate.name);
        self.email.clone_from(&candidate.email);
        self.touch();
    }

    /// Refreshes `updated_at`, strictly increasing it even when the wall
    /// clock has not moved since the previous stamp.
    pub(crate) fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// Case-insensitive exact email comparison.
    ///
    /// Folds one char at a time through its single-char uppercase mapping;
    /// chars whose uppercase expands (`ß` -> `SS`) only match themselves,
    /// and compatibility chars such as the Kelvin sign do not fold to ASCII.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.chars().count() == email.chars().count()
            && self
                .email
                .chars()
                .zip(email.chars())
                .all(|(stored, given)| fold_char(stored) == fold_char(given))
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `NonPositiveId` when `id <= 0`.
    /// - `UpdatedBeforeCreated` when the timestamps are reversed.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.id <= 0 {
            return Err(UserValidationError::NonPositiveId(self.id));
        }
        if self.updated_at < self.created_at {
            return Err(UserValidationError::UpdatedBeforeCreated {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
