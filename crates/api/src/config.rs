//! Server configuration loaded from environment variables.

use crate::auth::password::hash_password;

/// Server configuration loaded from environment variables.
///
/// All fields except the admin password have development defaults. In
/// production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory for stored portfolio media (default: `storage/media`).
    pub media_root: String,
    /// Admin credential and session settings.
    pub admin: AdminConfig,
    /// Chat-completion upstream; `None` disables the proxy (the handler then
    /// always answers with the fallback reply).
    pub chat: Option<ChatConfig>,
    /// SMTP feedback notification; `None` disables it.
    pub smtp: Option<SmtpConfig>,
}

/// The single static admin credential pair and session expiry.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Admin username (default: `admin`).
    pub username: String,
    /// Argon2id PHC hash of the admin password.
    pub password_hash: String,
    /// Session lifetime in hours (default: `12`).
    pub session_expiry_hours: i64,
}

/// Third-party chat-completion upstream settings.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Completion endpoint URL.
    pub endpoint: String,
    /// Bearer API key.
    pub api_key: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Upstream call timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

/// SMTP relay settings for feedback notification email.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Sender address.
    pub from: String,
    /// Recipient address for notifications.
    pub to: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `8000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `MEDIA_ROOT`              | `storage/media`         |
    /// | `ADMIN_USERNAME`          | `admin`                 |
    /// | `ADMIN_PASSWORD_HASH`     | -- (see below)          |
    /// | `ADMIN_PASSWORD`          | -- (see below)          |
    /// | `SESSION_EXPIRY_HOURS`    | `12`                    |
    /// | `CHAT_API_URL`            | unset -> proxy disabled |
    /// | `CHAT_API_KEY`            | ``                      |
    /// | `CHAT_MODEL`              | `gpt-4o-mini`           |
    /// | `CHAT_TIMEOUT_SECS`       | `10`                    |
    /// | `SMTP_HOST`               | unset -> email disabled |
    /// | `SMTP_USERNAME`           | ``                      |
    /// | `SMTP_PASSWORD`           | ``                      |
    /// | `SMTP_FROM`               | `SMTP_USERNAME`         |
    /// | `SMTP_TO`                 | `SMTP_USERNAME`         |
    ///
    /// The admin password comes from `ADMIN_PASSWORD_HASH` (a PHC string) or,
    /// as a development fallback, plaintext `ADMIN_PASSWORD` hashed at
    /// startup.
    ///
    /// # Panics
    ///
    /// Panics if neither `ADMIN_PASSWORD_HASH` nor `ADMIN_PASSWORD` is set,
    /// or if a numeric variable fails to parse. Misconfiguration should fail
    /// fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media_root =
            std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "storage/media".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            media_root,
            admin: AdminConfig::from_env(),
            chat: ChatConfig::from_env(),
            smtp: SmtpConfig::from_env(),
        }
    }
}

impl AdminConfig {
    fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());

        let password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) if !hash.is_empty() => hash,
            _ => {
                let plaintext = std::env::var("ADMIN_PASSWORD")
                    .expect("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set");
                hash_password(&plaintext).expect("Failed to hash ADMIN_PASSWORD")
            }
        };

        let session_expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| "12".into())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        Self {
            username,
            password_hash,
            session_expiry_hours,
        }
    }
}

impl ChatConfig {
    fn from_env() -> Option<Self> {
        let endpoint = std::env::var("CHAT_API_URL").ok().filter(|v| !v.is_empty())?;

        let api_key = std::env::var("CHAT_API_KEY").unwrap_or_default();
        let model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        let timeout_secs: u64 = std::env::var("CHAT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("CHAT_TIMEOUT_SECS must be a valid u64");

        Some(Self {
            endpoint,
            api_key,
            model,
            timeout_secs,
        })
    }
}

impl SmtpConfig {
    fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok().filter(|v| !v.is_empty())?;

        let username = std::env::var("SMTP_USERNAME").unwrap_or_default();
        let password = std::env::var("SMTP_PASSWORD").unwrap_or_default();
        let from = std::env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());
        let to = std::env::var("SMTP_TO").unwrap_or_else(|_| username.clone());

        Some(Self {
            host,
            username,
            password,
            from,
            to,
        })
    }
}
