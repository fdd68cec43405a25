//! Cryptographic primitives for session signing
//!
//! Everything here must stay constant-time with respect to secret data;
//! comparisons never short-circuit on the first differing byte.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

/// Pre-validated HMAC-SHA256 signing key.
///
/// Validating the secret once up front keeps the signing hot path free of
/// error handling; the key clones cheaply into every signer that needs it.
#[derive(Clone)]
pub struct SigningKey {
    secret: Arc<[u8]>,
}

impl SigningKey {
    /// Minimum allowed secret length in bytes (256 bits)
    pub const MIN_SECRET_LEN: usize = 32;

    /// Create a signing key from secret bytes.
    ///
    /// # Errors
    /// Returns an error if the secret is shorter than 32 bytes.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, KeyError> {
        let secret = secret.as_ref();
        if secret.len() < Self::MIN_SECRET_LEN {
            return Err(KeyError::SecretTooShort {
                actual: secret.len(),
                minimum: Self::MIN_SECRET_LEN,
            });
        }
        Ok(Self {
            secret: Arc::from(secret),
        })
    }

    /// Sign data and return the MAC bytes
    pub fn sign(&self, data: &[u8]) -> [u8; 32] {
        // Cannot fail: HMAC accepts any key length and ours was validated in new()
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("signing secret length already validated");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }

    /// Verify a signature in constant time
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        constant_time_eq(&self.sign(data), signature)
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("secret_len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

/// Errors that can occur when creating a signing key
#[derive(Debug, Clone, thiserror::Error)]
pub enum KeyError {
    #[error("signing secret too short: got {actual} bytes, need at least {minimum}")]
    SecretTooShort { actual: usize, minimum: usize },
}

/// Constant-time byte slice comparison.
///
/// Length is not treated as secret; differing lengths return early. Equal
/// lengths are compared with an XOR accumulator over every byte.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    diff == 0
}

/// Constant-time string comparison.
#[inline]
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
