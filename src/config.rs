use std::net::IpAddr;
use std::time::Duration;

/// Value shipped in sample `.env` files; treated the same as an absent key.
pub const RESEND_KEY_PLACEHOLDER: &str = "your_resend_api_key_here";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub site_name: String,
    pub max_body_size: usize,
    pub cors_origins: CorsOrigins,
    pub log_level: String,
    pub email: EmailConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub backend: EmailBackend,
    pub sender: String,
    pub recipient: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub enum EmailBackend {
    Disabled,
    Resend { api_key: String, base_url: String },
    Smtp(SmtpConfig),
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let database_name = std::env::var("DB_NAME").ok().filter(|s| !s.trim().is_empty());

        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env_or("CONTACT_PORT", "8001")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_PORT: {e}"))?;

        let site_name = env_or("CONTACT_SITE_NAME", "Contact Relay");

        let max_body_size: usize = env_or("CONTACT_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let cors_origins = CorsOrigins::parse(&env_or("CORS_ORIGINS", "*"));

        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        let email = EmailConfig::from_env()?;

        Ok(Config {
            database_url,
            database_name,
            host,
            port,
            site_name,
            max_body_size,
            cors_origins,
            log_level,
            email,
        })
    }
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. A `*` entry anywhere allows every origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, String> {
        let resend_key = usable_key(&std::env::var("RESEND_API_KEY").unwrap_or_default());

        let smtp = match (
            std::env::var("CONTACT_SMTP_HOST").ok(),
            std::env::var("CONTACT_SMTP_PORT").ok(),
            std::env::var("CONTACT_SMTP_USER").ok(),
            std::env::var("CONTACT_SMTP_PASS").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid CONTACT_SMTP_PORT: {e}"))?,
                user,
                pass,
            }),
            _ => None,
        };

        let backend = if let Some(api_key) = resend_key {
            EmailBackend::Resend {
                api_key,
                base_url: env_or("RESEND_BASE_URL", "https://api.resend.com"),
            }
        } else if let Some(smtp) = smtp {
            EmailBackend::Smtp(smtp)
        } else {
            EmailBackend::Disabled
        };

        let recipient = std::env::var("RECIPIENT_EMAIL").unwrap_or_default();
        if !matches!(backend, EmailBackend::Disabled) && recipient.trim().is_empty() {
            return Err("RECIPIENT_EMAIL is required when email notifications are enabled".to_string());
        }

        let timeout_secs: u64 = env_or("CONTACT_EMAIL_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_EMAIL_TIMEOUT_SECS: {e}"))?;

        Ok(EmailConfig {
            backend,
            sender: env_or("SENDER_EMAIL", "onboarding@resend.dev"),
            recipient,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn disabled() -> Self {
        EmailConfig {
            backend: EmailBackend::Disabled,
            sender: "onboarding@resend.dev".to_string(),
            recipient: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// The trimmed key, if it can be used as a credential. An empty key or the
/// sample placeholder leaves notifications switched off.
fn usable_key(raw: &str) -> Option<String> {
    let key = raw.trim();
    if key.is_empty() || key == RESEND_KEY_PLACEHOLDER {
        None
    } else {
        Some(key.to_string())
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
