use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;
use crate::models::{ContactForm, NewSubmission};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}.!#$%&'*+/=?^_`{|}~-]+@[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?)+$",
    )
    .unwrap()
});

const MAX_EMAIL_LEN: usize = 254;

/// Check the four required fields. All problems are reported at once.
pub fn validate(form: ContactForm) -> Result<NewSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required("name", form.name, &mut errors);
    let email = required("email", form.email, &mut errors);
    let company = required("company", form.company, &mut errors);
    let message = required("message", form.message, &mut errors);

    if let Some(ref e) = email {
        if !is_valid_email(e) {
            errors.push(FieldError::new("email", "value is not a valid email address"));
        }
    }

    match (name, email, company, message) {
        (Some(name), Some(email), Some(company), Some(message)) if errors.is_empty() => {
            Ok(NewSubmission {
                name,
                email,
                company,
                message,
            })
        }
        _ => Err(errors),
    }
}

fn required(field: &str, value: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        None => {
            errors.push(FieldError::new(field, "field required"));
            None
        }
        Some(s) if s.trim().is_empty() => {
            errors.push(FieldError::new(field, "field must not be empty"));
            None
        }
        // Postgres TEXT cannot hold NUL.
        Some(s) if s.contains('\0') => {
            errors.push(FieldError::new(field, "must not contain NUL characters"));
            None
        }
        Some(s) => Some(s),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.contains("..") {
        return false;
    }
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.ends_with('.') {
        return false;
    }
    EMAIL_RE.is_match(email)
}
