use crate::error::AppError;
use crate::models::{ContactForm, Submission};
use crate::state::SharedState;

use super::dispatch;
use super::validate;

/// Validate, persist, then notify.
///
/// Validation and storage failures are returned before any later step runs.
/// The notification step cannot fail this function.
pub async fn run(state: &SharedState, form: ContactForm) -> Result<Submission, AppError> {
    let new = validate::validate(form).map_err(AppError::Validation)?;

    let submission = state.store.insert(&Submission::create(new)).await?;
    tracing::info!("Contact submission saved: {}", submission.id);

    dispatch::notify(state, &submission).await;

    Ok(submission)
}
