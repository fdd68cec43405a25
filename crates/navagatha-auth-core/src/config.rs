//! Configuration types for the auth service

use std::time::Duration;

/// Auth service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for session signing (at least 32 bytes)
    pub session_secret: String,
    /// The one privileged account
    pub hr_email: String,
    /// Organizational email domain allowed to request login codes
    pub org_domain: String,
    /// Session token lifetime
    pub session_lifetime: Duration,
    /// One-time-code lifetime
    pub otp_ttl: Duration,
}

impl AuthConfig {
    /// Create a config with the default 24-hour sessions and 5-minute codes
    pub fn new(
        session_secret: impl Into<String>,
        hr_email: impl Into<String>,
        org_domain: impl Into<String>,
    ) -> Self {
        Self {
            session_secret: session_secret.into(),
            hr_email: hr_email.into(),
            org_domain: org_domain.into(),
            session_lifetime: Duration::from_secs(24 * 60 * 60),
            otp_ttl: Duration::from_secs(5 * 60),
        }
    }

    /// Set session lifetime
    pub fn with_session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session_lifetime = lifetime;
        self
    }

    /// Set one-time-code lifetime
    pub fn with_otp_ttl(mut self, ttl: Duration) -> Self {
        self.otp_ttl = ttl;
        self
    }

    /// Whether `email` belongs to the organizational domain.
    ///
    /// Domain matching is case-insensitive; only the suffix is checked.
    pub fn is_org_email(&self, email: &str) -> bool {
        email
            .to_lowercase()
            .ends_with(&format!("@{}", self.org_domain.to_lowercase()))
    }
}
