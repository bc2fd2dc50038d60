use askama::Template;

use crate::error::NotificationError;
use crate::models::Submission;

/// Contact fields are embedded verbatim; the template performs no HTML escaping.
#[derive(Template)]
#[template(path = "email/contact_notification.html", escape = "none")]
struct ContactNotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    message: &'a str,
    site_name: &'a str,
}

pub fn contact_subject(submission: &Submission) -> String {
    format!("New Contact Form Submission - {}", submission.company)
}

pub fn render_contact_notification(
    submission: &Submission,
    site_name: &str,
) -> Result<String, NotificationError> {
    ContactNotificationTemplate {
        name: &submission.name,
        email: &submission.email,
        company: &submission.company,
        message: &submission.message,
        site_name,
    }
    .render()
    .map_err(|e| NotificationError::from(format!("Failed to render email: {e}")))
}
