//! One-time-code credential store
//!
//! Challenges live in process memory only; a restart forgets them all, which
//! simply forces users to request a fresh code. The store is owned by
//! whoever constructs it (no module-level state), so tests can run isolated
//! instances side by side.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use dashmap::DashMap;
use rand::Rng;
use std::time::Duration;

use crate::crypto::constant_time_str_eq;

/// A pending login challenge for one email
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    /// The claimed identity, case preserved as submitted
    pub email: String,
    /// 6-digit numeric code
    pub code: String,
    /// Hard expiry; checked at verification time, not swept
    pub expires_at: DateTime<Utc>,
}

/// In-memory map of pending challenges, at most one per email.
///
/// Emails are compared case-insensitively: the map key is the lowercased
/// address, while the challenge keeps the submitted form.
pub struct OtpStore {
    entries: DashMap<String, OtpChallenge>,
    ttl: Duration,
}

impl OtpStore {
    /// Create a store whose challenges expire `ttl` after issuance
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    fn key(email: &str) -> String {
        email.to_lowercase()
    }

    /// Issue a fresh challenge for `email`, replacing any pending one.
    ///
    /// Returns the code for out-of-band delivery. Never fails.
    pub fn issue(&self, email: &str) -> String {
        let code = generate_code();
        let challenge = OtpChallenge {
            email: email.to_string(),
            code: code.clone(),
            expires_at: Utc::now() + ChronoDuration::milliseconds(self.ttl.as_millis() as i64),
        };
        self.entries.insert(Self::key(email), challenge);
        code
    }

    /// Verify a submitted code.
    ///
    /// A match consumes the challenge; an expired challenge is removed on
    /// sight; a plain mismatch leaves it in place so the user can retry
    /// until expiry.
    pub fn verify(&self, email: &str, submitted: &str) -> bool {
        let key = Self::key(email);
        let (expired, matched) = match self.entries.get(&key) {
            Some(entry) => (
                Utc::now() > entry.expires_at,
                constant_time_str_eq(&entry.code, submitted),
            ),
            None => return false,
        };

        if expired {
            self.entries.remove(&key);
            return false;
        }
        if matched {
            self.entries.remove(&key);
            return true;
        }
        false
    }
}

/// Uniformly random 6-digit code in [100000, 999999]
fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_MINUTES: Duration = Duration::from_secs(5 * 60);

    #[test]
    fn test_code_shape() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert!(!code.starts_with('0'));
        }
    }

    #[test]
    fn test_issue_then_verify_succeeds_once() {
        let store = OtpStore::new(FIVE_MINUTES);
        let code = store.issue("hr@navagathatech.com");
        assert!(store.verify("hr@navagathatech.com", &code));
        // Consumed on first success
        assert!(!store.verify("hr@navagathatech.com", &code));
    }

    #[test]
    fn test_mismatch_leaves_challenge_intact() {
        let store = OtpStore::new(FIVE_MINUTES);
        let code = store.issue("hr@navagathatech.com");
        assert!(!store.verify("hr@navagathatech.com", "000000"));
        // Still verifiable with the right code after a wrong guess
        assert!(store.verify("hr@navagathatech.com", &code));
    }

    #[test]
    fn test_unknown_email_fails() {
        let store = OtpStore::new(FIVE_MINUTES);
        assert!(!store.verify("nobody@navagathatech.com", "123456"));
    }

    #[test]
    fn test_expired_challenge_fails_and_is_removed() {
        let store = OtpStore::new(FIVE_MINUTES);
        let code = store.issue("hr@navagathatech.com");

        // Backdate the expiry past the window
        store
            .entries
            .get_mut("hr@navagathatech.com")
            .unwrap()
            .expires_at = Utc::now() - ChronoDuration::seconds(1);

        assert!(!store.verify("hr@navagathatech.com", &code));
        assert!(store.entries.is_empty());
        // Even the correct code is dead after expiry
        assert!(!store.verify("hr@navagathatech.com", &code));
    }

    #[test]
    fn test_reissue_replaces_pending_challenge() {
        let store = OtpStore::new(FIVE_MINUTES);
        let first = store.issue("hr@navagathatech.com");
        let second = store.issue("hr@navagathatech.com");
        assert_eq!(store.entries.len(), 1);
        if first != second {
            assert!(!store.verify("hr@navagathatech.com", &first));
        }
        assert!(store.verify("hr@navagathatech.com", &second));
    }

    #[test]
    fn test_email_compare_is_case_insensitive() {
        let store = OtpStore::new(FIVE_MINUTES);
        let code = store.issue("HR@NavagathaTech.com");
        // Stored case-preserving
        assert_eq!(
            store.entries.get("hr@navagathatech.com").unwrap().email,
            "HR@NavagathaTech.com"
        );
        assert!(store.verify("hr@navagathatech.com", &code));
    }
}
