use crate::models::Submission;
use crate::state::SharedState;

/// Best-effort notification for a stored submission.
///
/// Awaits exactly one delivery attempt and absorbs its outcome: a failure is
/// logged and never reaches the caller. Disabled mode returns immediately.
pub async fn notify(state: &SharedState, submission: &Submission) {
    let Some(notifier) = state.notifier.as_ref() else {
        tracing::debug!("Notifications disabled, skipping email for {}", submission.id);
        return;
    };

    match notifier.notify(submission).await {
        Ok(Some(message_id)) => {
            tracing::info!(
                "Email sent via {} for submission {}: {message_id}",
                notifier.name(),
                submission.id
            );
        }
        Ok(None) => {
            tracing::info!("Email sent via {} for submission {}", notifier.name(), submission.id);
        }
        Err(e) => {
            tracing::error!(
                "Failed to send email via {} for submission {}: {e}",
                notifier.name(),
                submission.id
            );
        }
    }
}
