//! Sign Up Use Case
//!
//! Registers a new, inactive user and mails out the confirmation token.

use std::sync::Arc;

use crate::application::token_sender::TokenSender;
use crate::application::tokens::TokenIssuer;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: String,
}

/// Sign up use case
pub struct SignUpUseCase<U, M>
where
    U: UserRepository,
    M: TokenSender,
{
    user_repo: Arc<U>,
    sender: Arc<M>,
    tokens: Arc<TokenIssuer>,
}

impl<U, M> SignUpUseCase<U, M>
where
    U: UserRepository,
    M: TokenSender,
{
    pub fn new(user_repo: Arc<U>, sender: Arc<M>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            user_repo,
            sender,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // All validation happens before anything is persisted
        let email =
            Email::new(input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let first_name = PersonName::new(input.first_name)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let last_name = PersonName::new(input.last_name)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordPolicy(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Fast pre-check; the unique index catches the race
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(email, password_hash, first_name, last_name);
        self.user_repo.create(&user).await?;

        // Mail dispatch is fire-and-forget: the token is queued and the
        // response returns without waiting on delivery
        let confirmation = self.tokens.issue_confirmation(&user.user_id)?;
        self.sender
            .send_confirmation(&user.email, &confirmation.token)
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            "User signed up, confirmation mail queued"
        );

        Ok(SignUpOutput {
            user_id: user.user_id.to_string(),
        })
    }
}
