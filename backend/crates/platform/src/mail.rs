//! Outbound Mail Dispatch
//!
//! SMTP transport plus a fire-and-forget dispatcher. Requests enqueue a
//! rendered message and return immediately; a background drain task hands
//! deliveries to a semaphore-bounded pool of send tasks so a slow SMTP
//! server can never stall the request path.

use std::sync::Arc;

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tokio::sync::{Semaphore, mpsc};

/// Mail errors
#[derive(Debug, Error)]
pub enum MailError {
    /// Address failed to parse
    #[error("Invalid mail address: {0}")]
    Address(String),

    /// Message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(String),

    /// SMTP delivery failed
    #[error("SMTP delivery failed: {0}")]
    Transport(String),

    /// Dispatch queue is saturated
    #[error("Mail queue is full")]
    QueueFull,

    /// Dispatcher has shut down
    #[error("Mail queue is closed")]
    QueueClosed,
}

/// SMTP configuration
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// SMTP credentials; both or neither
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender mailbox, e.g. `yourscript <no-reply@example.com>`
    pub from: String,
    /// Maximum concurrent SMTP deliveries
    pub max_concurrent_sends: usize,
    /// Pending deliveries before enqueue starts failing
    pub queue_capacity: usize,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            username: None,
            password: None,
            from: "no-reply@localhost".to_string(),
            max_concurrent_sends: 4,
            queue_capacity: 256,
        }
    }
}

/// A rendered, addressed message ready for transport
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Async SMTP mailer
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    pub fn from_config(config: &MailerConfig) -> Result<Self, MailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.smtp_host.as_str())
                .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    /// Deliver one message over SMTP.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let to = email
            .to
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Transport(e.to_string()))
    }
}

/// Bounded fire-and-forget mail dispatcher
///
/// `enqueue` never blocks and never waits on SMTP. Delivery failures are
/// logged, not surfaced: the request that triggered the mail has long
/// since been answered.
#[derive(Clone)]
pub struct MailDispatcher {
    tx: mpsc::Sender<OutgoingEmail>,
}

impl MailDispatcher {
    /// Spawn the drain task and return a handle for enqueueing.
    pub fn start(mailer: Mailer, config: &MailerConfig) -> Self {
        let (tx, mut rx) = mpsc::channel::<OutgoingEmail>(config.queue_capacity.max(1));
        let limit = Arc::new(Semaphore::new(config.max_concurrent_sends.max(1)));

        tokio::spawn(async move {
            while let Some(email) = rx.recv().await {
                let Ok(permit) = limit.clone().acquire_owned().await else {
                    break;
                };
                let mailer = mailer.clone();
                tokio::spawn(async move {
                    let _permit = permit;
                    if let Err(e) = mailer.send(&email).await {
                        tracing::warn!(
                            to = %email.to,
                            subject = %email.subject,
                            error = %e,
                            "Outbound mail delivery failed"
                        );
                    } else {
                        tracing::debug!(to = %email.to, "Outbound mail delivered");
                    }
                });
            }
        });

        Self { tx }
    }

    /// Enqueue a message without waiting.
    ///
    /// A saturated queue drops the message; the caller decides whether
    /// that is worth more than a warning.
    pub fn enqueue(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.tx.try_send(email).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => MailError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => MailError::QueueClosed,
        })
    }
}
