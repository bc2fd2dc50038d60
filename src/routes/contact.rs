use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::db::submissions::LIST_CAP;
use crate::error::{AppError, FieldError};
use crate::models::{ContactForm, Submission};
use crate::state::SharedState;
use crate::submission::pipeline;

pub async fn root(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({ "message": format!("{} API", state.config.site_name) }))
}

pub async fn submit(
    State(state): State<SharedState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<Submission>, AppError> {
    let Json(form) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Validation(vec![FieldError::new("body", rejection.body_text())])
        }
    })?;

    let submission = pipeline::run(&state, form).await?;
    Ok(Json(submission))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.store.list(LIST_CAP).await?;
    Ok(Json(submissions))
}
