//! SMTP notifier

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::NotifyError;
use crate::message::Outbound;
use crate::Notifier;

/// SMTP relay settings
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub user: String,
    pub pass: String,
    /// From header, e.g. `Navagatha Tech <no_reply@navagathatech.com>`
    pub from: String,
}

/// Delivers messages through an authenticated SMTP relay
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Build a notifier from relay settings.
    ///
    /// # Errors
    /// Fails if the relay host or the From mailbox is invalid.
    pub fn new(config: &SmtpConfig) -> Result<Self, NotifyError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();
        Ok(Self {
            transport,
            from: config.from.parse()?,
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: Outbound) -> Result<(), NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(message.to.parse()?)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_HTML);
        if let Some(reply_to) = &message.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }
        let mail = builder.body(message.html)?;

        self.transport.send(mail).await?;
        tracing::debug!(to = %message.to, subject = %message.subject, "delivered mail");
        Ok(())
    }
}
