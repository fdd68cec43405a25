//! Signed session tokens
//!
//! A session token is `base64url(JSON claims) . base64url(HMAC-SHA256 sig)`.
//! The claims carry the verified email plus issued/expiry timestamps in
//! milliseconds; there is no server-side session state, so a token stands on
//! its signature and expiry alone.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::crypto::SigningKey;
use crate::AuthError;

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Verified email identity
    pub email: String,
    /// Issue timestamp (milliseconds)
    pub issued: i64,
    /// Expiration timestamp (milliseconds)
    pub expires: i64,
}

impl SessionClaims {
    /// Build claims for `email` expiring `lifetime` from now
    pub fn new(email: impl Into<String>, lifetime: Duration) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            email: email.into(),
            issued: now,
            expires: now + lifetime.as_millis() as i64,
        }
    }

    /// Check whether the claims are past their expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires
    }
}

/// Signs and verifies session tokens.
///
/// The signer is the only component that ever touches the session secret.
#[derive(Clone)]
pub struct SessionSigner {
    key: SigningKey,
    lifetime: Duration,
}

impl SessionSigner {
    /// Create a signer issuing tokens valid for `lifetime`
    pub fn new(key: SigningKey, lifetime: Duration) -> Self {
        Self { key, lifetime }
    }

    /// Issue a token for a freshly verified email
    pub fn issue(&self, email: &str) -> Result<String, AuthError> {
        self.sign(&SessionClaims::new(email, self.lifetime))
    }

    /// Sign an explicit set of claims
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        let payload = serde_json::to_vec(claims).map_err(|e| {
            tracing::error!("failed to serialize session claims: {}", e);
            AuthError::Internal("failed to create session token".to_string())
        })?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);
        let signature = URL_SAFE_NO_PAD.encode(self.key.sign(payload_b64.as_bytes()));
        Ok(format!("{payload_b64}.{signature}"))
    }

    /// Verify a token and return its claims.
    ///
    /// The signature is checked before the payload is decoded; an untrusted
    /// payload is never parsed.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let parts: Vec<&str> = token.rsplitn(2, '.').collect();
        if parts.len() != 2 {
            return Err(AuthError::InvalidToken);
        }
        let (signature_b64, payload_b64) = (parts[0], parts[1]);

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::InvalidToken)?;
        if !self.key.verify(payload_b64.as_bytes(), &signature) {
            tracing::debug!("session token signature mismatch");
            return Err(AuthError::InvalidToken);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::InvalidToken)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::InvalidToken)?;

        if claims.is_expired() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn signer() -> SessionSigner {
        let key = SigningKey::new("test-session-secret-0123456789abcdef").unwrap();
        SessionSigner::new(key, DAY)
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let signer = signer();
        let token = signer.issue("hr@navagathatech.com").unwrap();
        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.email, "hr@navagathatech.com");
        assert!(claims.expires > claims.issued);
    }

    #[test]
    fn test_fresh_token_not_expired() {
        let claims = SessionClaims::new("staff@navagathatech.com", DAY);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = signer();
        let mut claims = SessionClaims::new("hr@navagathatech.com", DAY);
        // Simulate the clock running past the 24-hour expiry
        claims.issued -= 25 * 60 * 60 * 1000;
        claims.expires -= 25 * 60 * 60 * 1000;
        let token = signer.sign(&claims).unwrap();
        assert!(matches!(signer.verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let signer = signer();
        let token = signer.issue("hr@navagathatech.com").unwrap();
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert!(matches!(
            signer.verify(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let signer = signer();
        let token = signer.issue("staff@navagathatech.com").unwrap();
        let signature = token.rsplit('.').next().unwrap();

        // Swap in a privileged identity under the original signature
        let forged_claims = SessionClaims::new("hr@navagathatech.com", DAY);
        let forged_payload =
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{forged_payload}.{signature}");

        assert!(matches!(signer.verify(&forged), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = signer();
        let other = SessionSigner::new(
            SigningKey::new("another-session-secret-0123456789ab").unwrap(),
            DAY,
        );
        let token = signer.issue("hr@navagathatech.com").unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let signer = signer();
        for token in ["", "nodots", "a.b.c.d", ".", "..", "!!!bad-base64!!!.sig"] {
            assert!(signer.verify(token).is_err(), "accepted {token:?}");
        }

        // Valid base64 that is not JSON
        let not_json = URL_SAFE_NO_PAD.encode(b"not json");
        assert!(signer.verify(&format!("{not_json}.sig")).is_err());
    }
}
