//! Navagatha Notify - templated outbound email
//!
//! The portal treats mail as a fire-and-forget collaborator behind the
//! [`Notifier`] trait: build an [`Outbound`] message from one of the
//! templates, hand it to the notifier, and let the caller decide whether a
//! delivery failure sinks the operation (it does for login codes; it may be
//! logged and swallowed for courtesy mail).

pub mod error;
pub mod message;
pub mod smtp;

pub use error::NotifyError;
pub use message::{JobApplication, Outbound};
pub use smtp::{SmtpConfig, SmtpNotifier};

use async_trait::async_trait;

/// Outbound message delivery
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message
    async fn send(&self, message: Outbound) -> Result<(), NotifyError>;
}

/// Stand-in for deployments without a mail relay; every send fails with
/// [`NotifyError::NotConfigured`]
pub struct Unconfigured;

#[async_trait]
impl Notifier for Unconfigured {
    async fn send(&self, message: Outbound) -> Result<(), NotifyError> {
        tracing::warn!(to = %message.to, subject = %message.subject, "dropping mail: no relay configured");
        Err(NotifyError::NotConfigured)
    }
}
