//! Configuration for the portal API service.

use navagatha_auth_core::AuthConfig;
use navagatha_notify::SmtpConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Development fallback for the session secret; never valid in production.
pub const DEV_SESSION_SECRET: &str = "dev-only-session-secret-change-in-prod";

/// Portal API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Whether this deployment is production (`APP_ENV=production`)
    pub production: bool,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// Path to the jobs collection document
    pub jobs_path: PathBuf,

    /// Path to the case-studies collection document
    pub case_studies_path: PathBuf,

    /// Inbox receiving candidate applications
    pub hr_inbox: String,

    /// SMTP relay; absent means the notifier is unconfigured and OTP
    /// issuance fails with a server error
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        // Session secret: a missing or default secret is acceptable only
        // outside production
        let session_secret = match std::env::var("SESSION_SECRET") {
            Ok(secret) if production && secret == DEV_SESSION_SECRET => {
                return Err(ConfigError::Invalid(
                    "SESSION_SECRET must not be the development default in production",
                ));
            }
            Ok(secret) => secret,
            Err(_) if production => return Err(ConfigError::Missing("SESSION_SECRET")),
            Err(_) => DEV_SESSION_SECRET.to_string(),
        };
        if session_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "SESSION_SECRET must be at least 32 characters",
            ));
        }

        let http_port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let hr_email =
            std::env::var("HR_EMAIL").unwrap_or_else(|_| "hr@navagathatech.com".to_string());

        let org_domain = std::env::var("ORG_EMAIL_DOMAIN")
            .unwrap_or_else(|_| "navagathatech.com".to_string());

        // Session duration (default 24 hours)
        let session_duration_hours: u64 = std::env::var("SESSION_DURATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("SESSION_DURATION_HOURS"))?;

        let auth = AuthConfig::new(session_secret, hr_email, org_domain)
            .with_session_lifetime(Duration::from_secs(session_duration_hours * 3600));

        let jobs_path = std::env::var("JOBS_PATH")
            .unwrap_or_else(|_| "data/jobs.json".to_string())
            .into();
        let case_studies_path = std::env::var("CASE_STUDIES_PATH")
            .unwrap_or_else(|_| "data/case-studies.json".to_string())
            .into();

        let hr_inbox =
            std::env::var("HR_INBOX").unwrap_or_else(|_| "info@navagathatech.com".to_string());

        let smtp = match std::env::var("SMTP_HOST") {
            Ok(host) => {
                let user = std::env::var("SMTP_USER").map_err(|_| ConfigError::Missing("SMTP_USER"))?;
                let pass = std::env::var("SMTP_PASS").map_err(|_| ConfigError::Missing("SMTP_PASS"))?;
                let from = std::env::var("SMTP_FROM").unwrap_or_else(|_| {
                    "Navagatha Auth <no_reply@navagathatech.com>".to_string()
                });
                Some(SmtpConfig {
                    host,
                    user,
                    pass,
                    from,
                })
            }
            Err(_) => None,
        };

        Ok(Self {
            http_port,
            production,
            auth,
            jobs_path,
            case_studies_path,
            hr_inbox,
            smtp,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
