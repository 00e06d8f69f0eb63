//! Refresh Session Use Case
//!
//! Mints a fresh access token from a refresh token. The subject comes from
//! the refresh token itself, never from the client. Tokens rotate: the
//! presented token is retired and a replacement issued in the same call,
//! bounding the blast radius of a leaked refresh token.

use std::sync::Arc;

use platform::token::SignedToken;

use crate::application::tokens::TokenIssuer;
use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

/// Refresh input
pub struct RefreshSessionInput {
    /// The refresh token presented by the client (cookie-borne)
    pub refresh_token: String,
}

/// Refresh output
#[derive(Debug)]
pub struct RefreshSessionOutput {
    pub user_id: String,
    pub access: SignedToken,
    pub refresh: SignedToken,
}

/// Refresh session use case
pub struct RefreshSessionUseCase<R>
where
    R: RefreshTokenRepository,
{
    refresh_repo: Arc<R>,
    tokens: Arc<TokenIssuer>,
}

impl<R> RefreshSessionUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(refresh_repo: Arc<R>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            refresh_repo,
            tokens,
        }
    }

    pub async fn execute(&self, input: RefreshSessionInput) -> AuthResult<RefreshSessionOutput> {
        // Cryptographic validity first (signature + expiry)
        let user_id = self.tokens.decode_refresh(&input.refresh_token)?;

        // A valid-looking token that is no longer stored has been revoked
        // or already rotated
        if !self.refresh_repo.exists(&input.refresh_token).await? {
            return Err(AuthError::RefreshRevoked);
        }

        // Rotate: retire the used token, persist its replacement
        self.refresh_repo.delete(&input.refresh_token).await?;

        let refresh = self.tokens.issue_refresh(&user_id)?;
        let record = RefreshToken::new(user_id, refresh.token.clone(), refresh.expires_at);
        self.refresh_repo.create(&record).await?;

        let access = self.tokens.issue_access(&user_id)?;

        tracing::debug!(user_id = %user_id, "Session refreshed");

        Ok(RefreshSessionOutput {
            user_id: user_id.to_string(),
            access,
            refresh,
        })
    }
}
