//! Token Issuer
//!
//! Application service wrapping one [`TokenCodec`] per token class.
//! Access and refresh credentials fail as `Unauthenticated`; confirmation
//! tokens keep the finer-grained expired/invalid distinction because the
//! verify endpoint reports it to the user.

use platform::token::{SignedToken, TokenCodec};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Issues and decodes the three token classes
pub struct TokenIssuer {
    access: TokenCodec,
    refresh: TokenCodec,
    confirmation: TokenCodec,
}

impl TokenIssuer {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            access: TokenCodec::new(&config.access_token_secret, config.access_token_ttl_secs),
            refresh: TokenCodec::new(&config.refresh_token_secret, config.refresh_token_ttl_secs),
            confirmation: TokenCodec::new(
                &config.confirmation_token_secret,
                config.confirmation_token_ttl_secs,
            ),
        }
    }

    pub fn issue_access(&self, user_id: &UserId) -> AuthResult<SignedToken> {
        self.access
            .issue(user_id.as_uuid())
            .map_err(|e| AuthError::Internal(format!("Failed to issue access token: {}", e)))
    }

    pub fn issue_refresh(&self, user_id: &UserId) -> AuthResult<SignedToken> {
        self.refresh
            .issue(user_id.as_uuid())
            .map_err(|e| AuthError::Internal(format!("Failed to issue refresh token: {}", e)))
    }

    pub fn issue_confirmation(&self, user_id: &UserId) -> AuthResult<SignedToken> {
        self.confirmation
            .issue(user_id.as_uuid())
            .map_err(|e| AuthError::Internal(format!("Failed to issue confirmation token: {}", e)))
    }

    /// Decode an access token into its subject
    pub fn decode_access(&self, token: &str) -> AuthResult<UserId> {
        let claims = self
            .access
            .decode(token)
            .map_err(|_| AuthError::Unauthenticated)?;
        parse_subject(&claims.sub).ok_or(AuthError::Unauthenticated)
    }

    /// Decode a refresh token into its subject
    pub fn decode_refresh(&self, token: &str) -> AuthResult<UserId> {
        let claims = self
            .refresh
            .decode(token)
            .map_err(|_| AuthError::Unauthenticated)?;
        parse_subject(&claims.sub).ok_or(AuthError::Unauthenticated)
    }

    /// Decode a confirmation token into its subject
    pub fn decode_confirmation(&self, token: &str) -> AuthResult<UserId> {
        let claims = self.confirmation.decode(token).map_err(AuthError::from)?;
        parse_subject(&claims.sub).ok_or(AuthError::TokenInvalid)
    }
}

fn parse_subject(sub: &str) -> Option<UserId> {
    sub.parse::<Uuid>().ok().map(UserId::from_uuid)
}
