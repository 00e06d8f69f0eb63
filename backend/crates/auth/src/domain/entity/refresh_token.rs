//! Refresh Token Entity
//!
//! A persisted refresh token. Access tokens are stateless; refresh tokens
//! are stored so revocation (sign-out, rotation) is possible.

use chrono::{DateTime, Utc};

use crate::domain::value_object::user_id::UserId;

/// Refresh token record
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub user_id: UserId,
    /// The signed token string as handed to the client
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn new(user_id: UserId, token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            token,
            issued_at: Utc::now(),
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
