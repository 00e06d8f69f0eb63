//! Token Sender Port
//!
//! Application-side interface for dispatching confirmation tokens by mail.
//! Implementations must enqueue and return; the HTTP response never waits
//! on SMTP.

use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Confirmation mail dispatch port
#[trait_variant::make(TokenSender: Send)]
pub trait LocalTokenSender {
    /// Queue a confirmation mail carrying the verification token.
    async fn send_confirmation(&self, email: &Email, token: &str) -> AuthResult<()>;
}
