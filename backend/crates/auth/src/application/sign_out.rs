//! Sign Out Use Case
//!
//! Revokes every refresh token issued to the user. Any previously issued
//! refresh token fails afterwards with "revoked", not "malformed".

use std::sync::Arc;

use crate::domain::repository::RefreshTokenRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<R>
where
    R: RefreshTokenRepository,
{
    refresh_repo: Arc<R>,
}

impl<R> SignOutUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(refresh_repo: Arc<R>) -> Self {
        Self { refresh_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<u64> {
        let revoked = self.refresh_repo.delete_all_for_user(user_id).await?;

        tracing::info!(user_id = %user_id, revoked = revoked, "User signed out");

        Ok(revoked)
    }
}
