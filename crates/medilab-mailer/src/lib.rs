//! medilab-mailer — Email notifications for contact-form submissions.
//! Composes a staff notification and a submitter confirmation, then hands both
//! to an SMTP transport. Dispatch is conditional: without configured
//! credentials nothing is sent and the submission still counts as handled.

pub mod error;
pub mod message;
pub mod transport;

use std::sync::Arc;

use chrono::Local;
use medilab_content::LabProfile;
use tracing::debug;

pub use error::{MailerError, Result};
pub use message::{ContactSubmission, OutgoingEmail};
pub use transport::{MailTransport, SmtpMailTransport};

/// SMTP relay settings, as sourced from the environment by the web layer.
#[derive(Debug, Clone, Default)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub use_tls: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub default_sender: Option<String>,
}

/// What actually happened to a dispatch request. `Skipped` is still a success
/// from the submitter's point of view; callers that care can tell the two
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Skipped,
}

pub struct Mailer {
    transport: Option<Arc<dyn MailTransport>>,
    sender: String,
}

impl Mailer {
    /// Builds the SMTP transport when a username is configured; otherwise the
    /// mailer silently skips every dispatch.
    pub fn from_config(config: &SmtpConfig) -> Result<Self> {
        let sender = config
            .default_sender
            .clone()
            .or_else(|| config.username.clone())
            .unwrap_or_default();
        let transport = match config.username {
            Some(_) => Some(Arc::new(SmtpMailTransport::new(config)?) as Arc<dyn MailTransport>),
            None => None,
        };
        Ok(Self { transport, sender })
    }

    /// A mailer that never sends. Same behavior as missing credentials.
    pub fn unconfigured() -> Self {
        Self {
            transport: None,
            sender: String::new(),
        }
    }

    /// Injects an arbitrary transport. Used by tests and available to any
    /// future non-SMTP delivery path.
    pub fn with_transport(transport: Arc<dyn MailTransport>, sender: impl Into<String>) -> Self {
        Self {
            transport: Some(transport),
            sender: sender.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// Composes and delivers both messages for one submission: staff
    /// notification first, submitter confirmation second. Returns `Skipped`
    /// without touching the network when no transport is configured.
    pub async fn dispatch_contact(
        &self,
        submission: &ContactSubmission,
        profile: &LabProfile,
    ) -> Result<DispatchOutcome> {
        let Some(transport) = &self.transport else {
            debug!("mail credentials not configured; skipping contact dispatch");
            return Ok(DispatchOutcome::Skipped);
        };

        let staff = message::staff_notification(submission, profile, Local::now());
        let confirmation = message::submitter_confirmation(submission, profile);

        transport.deliver(&staff, &self.sender).await?;
        transport.deliver(&confirmation, &self.sender).await?;
        Ok(DispatchOutcome::Sent)
    }
}
