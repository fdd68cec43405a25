//! Auth service - ties together the credential store, session signing, and
//! the authorization policy

use crate::{
    config::AuthConfig,
    crypto::{KeyError, SigningKey},
    otp::OtpStore,
    policy::HrPolicy,
    session::{SessionClaims, SessionSigner},
    AuthError,
};

/// Authentication service
///
/// Provides a unified interface for:
/// - One-time-code issuance and verification
/// - Session token creation and validation
/// - The HR authorization check
pub struct AuthService {
    config: AuthConfig,
    otp: OtpStore,
    signer: SessionSigner,
    policy: HrPolicy,
}

impl AuthService {
    /// Create a new auth service.
    ///
    /// # Errors
    /// Fails if the configured session secret is shorter than 32 bytes.
    pub fn new(config: AuthConfig) -> Result<Self, KeyError> {
        let key = SigningKey::new(config.session_secret.as_bytes())?;
        Ok(Self {
            otp: OtpStore::new(config.otp_ttl),
            signer: SessionSigner::new(key, config.session_lifetime),
            policy: HrPolicy::new(config.hr_email.clone()),
            config,
        })
    }

    // =========================================================================
    // One-time codes
    // =========================================================================

    /// Whether `email` may request a login code at all
    pub fn is_org_email(&self, email: &str) -> bool {
        self.config.is_org_email(email)
    }

    /// Issue a login code for `email`, replacing any pending one
    pub fn request_code(&self, email: &str) -> String {
        let code = self.otp.issue(email);
        tracing::debug!(email, "issued login code");
        code
    }

    /// Verify a submitted login code (consumes the challenge on success)
    pub fn verify_code(&self, email: &str, code: &str) -> bool {
        self.otp.verify(email, code)
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    /// Mint a signed session token for a verified email
    pub fn create_session(&self, email: &str) -> Result<String, AuthError> {
        self.signer.issue(email)
    }

    /// Resolve a presented token to its claims.
    ///
    /// Every failure mode (absent, malformed, tampered, expired) collapses
    /// to `None`; callers never learn why a session was rejected.
    pub fn resolve_session(&self, token: &str) -> Option<SessionClaims> {
        match self.signer.verify(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!(error = %e, "session token rejected");
                None
            }
        }
    }

    // =========================================================================
    // Authorization
    // =========================================================================

    /// Whether the session belongs to the designated HR account
    pub fn is_privileged(&self, claims: &SessionClaims) -> bool {
        self.policy.is_authorized(claims)
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("hr_email", &self.config.hr_email)
            .field("org_domain", &self.config.org_domain)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(AuthConfig::new(
            "test-session-secret-0123456789abcdef",
            "hr@navagathatech.com",
            "navagathatech.com",
        ))
        .unwrap()
    }

    #[test]
    fn test_rejects_weak_secret() {
        let result = AuthService::new(AuthConfig::new(
            "short",
            "hr@navagathatech.com",
            "navagathatech.com",
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_full_login_flow() {
        let service = service();
        assert!(service.is_org_email("hr@navagathatech.com"));

        let code = service.request_code("hr@navagathatech.com");
        assert!(service.verify_code("hr@navagathatech.com", &code));

        let token = service.create_session("hr@navagathatech.com").unwrap();
        let claims = service.resolve_session(&token).unwrap();
        assert_eq!(claims.email, "hr@navagathatech.com");
        assert!(service.is_privileged(&claims));
    }

    #[test]
    fn test_code_single_use() {
        let service = service();
        let code = service.request_code("hr@navagathatech.com");
        assert!(service.verify_code("hr@navagathatech.com", &code));
        assert!(!service.verify_code("hr@navagathatech.com", &code));
    }

    #[test]
    fn test_non_hr_session_not_privileged() {
        let service = service();
        let token = service.create_session("dev@navagathatech.com").unwrap();
        let claims = service.resolve_session(&token).unwrap();
        assert!(!service.is_privileged(&claims));
    }

    #[test]
    fn test_garbage_token_resolves_to_none() {
        let service = service();
        assert!(service.resolve_session("not-a-token").is_none());
        assert!(service.resolve_session("").is_none());
    }
}
