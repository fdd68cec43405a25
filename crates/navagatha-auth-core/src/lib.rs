//! Navagatha Auth Core - Authentication business logic
//!
//! Core authentication functionality for the employee portal: one-time-code
//! challenges, HMAC-signed session tokens, and the HR authorization policy.

pub mod config;
pub mod crypto;
pub mod error;
pub mod otp;
pub mod policy;
pub mod service;
pub mod session;

pub use config::AuthConfig;
pub use crypto::{constant_time_eq, constant_time_str_eq, KeyError, SigningKey};
pub use error::AuthError;
pub use otp::{OtpChallenge, OtpStore};
pub use policy::HrPolicy;
pub use service::AuthService;
pub use session::{SessionClaims, SessionSigner};
