use async_trait::async_trait;
use serde_json::json;

use super::{templates, Notifier};
use crate::config::EmailConfig;
use crate::error::NotificationError;
use crate::models::Submission;

/// Delivers notifications through the Resend transactional email API.
pub struct ResendNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
    site_name: String,
}

impl ResendNotifier {
    pub fn new(
        config: &EmailConfig,
        api_key: &str,
        base_url: &str,
        site_name: &str,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            from: config.sender.clone(),
            to: config.recipient.clone(),
            site_name: site_name.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    fn name(&self) -> &str {
        "resend"
    }

    async fn notify(&self, submission: &Submission) -> Result<Option<String>, NotificationError> {
        let html = templates::render_contact_notification(submission, &self.site_name)?;

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": &self.from,
                "to": [&self.to],
                "subject": templates::contact_subject(submission),
                "html": html,
            }))
            .send()
            .await
            .map_err(|e| NotificationError::from(format!("Resend request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(512)
                .collect::<String>();
            return Err(NotificationError::from(format!(
                "Resend rejected message ({}): {body}",
                status.as_u16()
            )));
        }

        let body: serde_json::Value = resp.json().await.unwrap_or_default();
        Ok(body["id"].as_str().map(|s| s.to_string()))
    }
}
