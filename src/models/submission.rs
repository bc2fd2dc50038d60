use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact-form entry.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Raw intake payload. Every field is optional here so that a missing field
/// surfaces as a field-level validation error instead of a decode failure.
/// Anything else the client sends, `id` and `timestamp` included, is dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

/// The four client-supplied fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl Submission {
    /// Stamp a validated payload with a fresh id and the current instant.
    pub fn create(new: NewSubmission) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: new.name,
            email: new.email,
            company: new.company,
            message: new.message,
            timestamp: Utc::now(),
        }
    }
}
