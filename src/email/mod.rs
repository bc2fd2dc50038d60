pub mod resend;
pub mod smtp;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{EmailBackend, EmailConfig};
use crate::error::NotificationError;
use crate::models::Submission;

use self::resend::ResendNotifier;
use self::smtp::SmtpNotifier;

/// Outbound notification channel for new submissions.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    /// Make one delivery attempt. Returns the provider's message id when it reports one.
    async fn notify(&self, submission: &Submission) -> Result<Option<String>, NotificationError>;
}

/// Build the configured notifier. `None` means notifications are disabled.
pub fn build_notifier(
    config: &EmailConfig,
    site_name: &str,
) -> Result<Option<Arc<dyn Notifier>>, String> {
    let notifier: Arc<dyn Notifier> = match &config.backend {
        EmailBackend::Disabled => return Ok(None),
        EmailBackend::Resend { api_key, base_url } => {
            Arc::new(ResendNotifier::new(config, api_key, base_url, site_name)?)
        }
        EmailBackend::Smtp(smtp) => Arc::new(SmtpNotifier::new(config, smtp, site_name)?),
    };
    Ok(Some(notifier))
}
