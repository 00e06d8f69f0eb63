//! SMTP Token Sender
//!
//! Renders the confirmation mail and hands it to the platform mail
//! dispatcher. Enqueue-only: sign-up latency never includes an SMTP
//! round-trip.

use platform::mail::{MailDispatcher, MailError, OutgoingEmail};

use crate::application::token_sender::TokenSender;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

const CONFIRMATION_SUBJECT: &str = "Confirm your email address";

/// SMTP-backed confirmation mail sender
#[derive(Clone)]
pub struct SmtpTokenSender {
    dispatcher: MailDispatcher,
    verification_base_url: String,
}

impl SmtpTokenSender {
    pub fn new(dispatcher: MailDispatcher, verification_base_url: impl Into<String>) -> Self {
        Self {
            dispatcher,
            verification_base_url: verification_base_url.into(),
        }
    }
}

impl TokenSender for SmtpTokenSender {
    async fn send_confirmation(&self, email: &Email, token: &str) -> AuthResult<()> {
        let link = verification_link(&self.verification_base_url, token);

        let outgoing = OutgoingEmail {
            to: email.to_string(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            html_body: render_confirmation_body(&link),
        };

        match self.dispatcher.enqueue(outgoing) {
            Ok(()) => Ok(()),
            // Registration does not fail on mail backlog; the user can
            // request the mail again by signing in
            Err(MailError::QueueFull) => {
                tracing::warn!(to = %email, "Mail queue full, confirmation mail dropped");
                Ok(())
            }
            Err(e) => Err(AuthError::Internal(e.to_string())),
        }
    }
}

fn verification_link(base_url: &str, token: &str) -> String {
    format!("{}/v1/auth/verify/{}", base_url.trim_end_matches('/'), token)
}

fn render_confirmation_body(link: &str) -> String {
    format!(
        concat!(
            "<html><body>",
            "<p>Welcome! Please confirm your email address to activate your account.</p>",
            "<p><a href=\"{link}\">Confirm email</a></p>",
            "<p>If the link does not work, open this address in your browser:<br>{link}</p>",
            "<p>If you did not create this account, you can ignore this mail.</p>",
            "</body></html>"
        ),
        link = link
    )
}
