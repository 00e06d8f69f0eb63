//! Email Verification Use Case
//!
//! Turns a pending account active. Verifying an already-active account is
//! answered with success so a reused token leaks nothing.

use std::sync::Arc;

use crate::application::tokens::TokenIssuer;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Email verification input
pub struct VerifyEmailInput {
    /// Opaque token string from the confirmation link
    pub token: String,
}

/// Email verification output
#[derive(Debug)]
pub struct VerifyEmailOutput {
    /// The verified address, echoed back
    pub email: String,
}

/// Email verification use case
pub struct VerifyEmailUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenIssuer>,
}

impl<U> VerifyEmailUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenIssuer>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: VerifyEmailInput) -> AuthResult<VerifyEmailOutput> {
        let user_id = self.tokens.decode_confirmation(&input.token)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_active {
            // Already verified - idempotent success
            return Ok(VerifyEmailOutput {
                email: user.email.to_string(),
            });
        }

        self.user_repo.set_active(&user.user_id).await?;

        tracing::info!(user_id = %user.user_id, "Email verified, account activated");

        Ok(VerifyEmailOutput {
            email: user.email.to_string(),
        })
    }
}
