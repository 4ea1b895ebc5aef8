//! Outbound mail transport port and its SMTP adapter.

use async_trait::async_trait;
use lettre::{
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::error::{MailerError, Result};
use crate::message::OutgoingEmail;
use crate::SmtpConfig;

/// Fire-and-forget delivery of one composed message. No queuing, no retry;
/// implemented by the SMTP adapter and by test doubles.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, email: &OutgoingEmail, from: &str) -> Result<()>;
}

/// lettre-backed SMTP relay connection.
pub struct SmtpMailTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
                .map_err(|e| MailerError::Config(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
        };
        builder = builder.port(config.port);
        if let Some(username) = &config.username {
            let password = config.password.clone().unwrap_or_default();
            builder = builder.credentials(Credentials::new(username.clone(), password));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn deliver(&self, email: &OutgoingEmail, from: &str) -> Result<()> {
        let message = Message::builder()
            .from(parse_mailbox(from)?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.clone())
            .body(email.body.clone())
            .map_err(|e| MailerError::Dispatch(e.to_string()))?;

        self.inner
            .send(message)
            .await
            .map_err(|e| MailerError::Dispatch(e.to_string()))?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse()
        .map_err(|e| MailerError::Dispatch(format!("bad address {address:?}: {e}")))
}
