use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{templates, Notifier};
use crate::config::{EmailConfig, SmtpConfig};
use crate::error::NotificationError;
use crate::models::Submission;

/// Delivers notifications over an authenticated STARTTLS relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
    site_name: String,
}

impl SmtpNotifier {
    pub fn new(config: &EmailConfig, smtp: &SmtpConfig, site_name: &str) -> Result<Self, String> {
        let creds = Credentials::new(smtp.user.clone(), smtp.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(smtp.port)
            .credentials(creds)
            .timeout(Some(config.timeout))
            .build();

        Ok(Self {
            transport,
            from: config.sender.clone(),
            to: config.recipient.clone(),
            site_name: site_name.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    fn name(&self) -> &str {
        "smtp"
    }

    async fn notify(&self, submission: &Submission) -> Result<Option<String>, NotificationError> {
        let html = templates::render_contact_notification(submission, &self.site_name)?;

        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| NotificationError::from(format!("Invalid from address: {e}")))?,
            )
            .to(self
                .to
                .parse()
                .map_err(|e| NotificationError::from(format!("Invalid to address: {e}")))?)
            .subject(templates::contact_subject(submission))
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| NotificationError::from(format!("Failed to build email: {e}")))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| NotificationError::from(format!("Failed to send email: {e}")))?;

        Ok(response.message().next().map(|s| s.to_string()))
    }
}
