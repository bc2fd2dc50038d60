use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// A single rejected field in an intake payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation(Vec<FieldError>),
    PayloadTooLarge(String),
    Storage(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(fields) => {
                let names: Vec<&str> = fields.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Validation Error: {}", names.join(", "))
            }
            AppError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            AppError::Storage(err) => write!(f, "Storage Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(fields) => {
                let body = json!({
                    "error": "Validation failed",
                    "fields": fields,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::PayloadTooLarge(msg) => {
                let body = json!({ "error": msg });
                (StatusCode::PAYLOAD_TOO_LARGE, axum::Json(body)).into_response()
            }
            AppError::Storage(err) => {
                tracing::error!("Storage error: {err}");
                let body = json!({ "error": "Internal server error" });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err)
    }
}

/// Failure to deliver a notification. Never converted into an [`AppError`].
#[derive(Debug)]
pub struct NotificationError {
    pub message: String,
}

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NotificationError {}

impl From<String> for NotificationError {
    fn from(s: String) -> Self {
        NotificationError { message: s }
    }
}

impl From<&str> for NotificationError {
    fn from(s: &str) -> Self {
        NotificationError {
            message: s.to_string(),
        }
    }
}
