//! Notifier errors

use thiserror::Error;

/// Outbound mail errors
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No mail transport is configured for this deployment
    #[error("email service not configured")]
    NotConfigured,

    /// An address failed to parse
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP transport rejected the message
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
