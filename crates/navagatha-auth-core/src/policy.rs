//! Authorization policy
//!
//! Single tenant, single role: exactly one address (the designated HR
//! account) may mutate job postings. No hierarchy, no per-resource
//! ownership.

use crate::crypto::constant_time_str_eq;
use crate::session::SessionClaims;

/// The "is this the HR account" predicate
#[derive(Debug, Clone)]
pub struct HrPolicy {
    hr_email: String,
}

impl HrPolicy {
    pub fn new(hr_email: impl Into<String>) -> Self {
        Self {
            hr_email: hr_email.into(),
        }
    }

    /// True iff the session identity is the designated HR address.
    ///
    /// The compare is exact (case-sensitive) and constant-time.
    pub fn is_authorized(&self, claims: &SessionClaims) -> bool {
        constant_time_str_eq(&claims.email, &self.hr_email)
    }
}
