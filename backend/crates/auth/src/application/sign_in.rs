//! Sign In Use Case
//!
//! Authenticates a user and issues an access/refresh token pair. The
//! refresh token is persisted before either token is handed out; if the
//! write fails the client gets nothing.

use std::sync::Arc;

use platform::token::SignedToken;

use crate::application::tokens::TokenIssuer;
use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user_id: String,
    pub access: SignedToken,
    pub refresh: SignedToken,
}

/// Sign in use case
pub struct SignInUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    refresh_repo: Arc<R>,
    tokens: Arc<TokenIssuer>,
}

impl<U, R> SignInUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    pub fn new(user_repo: Arc<U>, refresh_repo: Arc<R>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            user_repo,
            refresh_repo,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Unknown email, malformed email and wrong password all collapse
        // into the same error
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Activation state is not a secret; a distinct message is allowed
        if !user.can_sign_in() {
            return Err(AuthError::AccountInactive);
        }

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        // Persist the refresh token first; only then is issuance complete
        let refresh = self.tokens.issue_refresh(&user.user_id)?;
        let record = RefreshToken::new(user.user_id, refresh.token.clone(), refresh.expires_at);
        self.refresh_repo.create(&record).await?;

        let access = self.tokens.issue_access(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput {
            user_id: user.user_id.to_string(),
            access,
            refresh,
        })
    }
}
