//! Delete User Use Case
//!
//! Removes the account and revokes its refresh tokens.

use std::sync::Arc;

use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Delete user use case
pub struct DeleteUserUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    refresh_repo: Arc<R>,
}

impl<U, R> DeleteUserUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    pub fn new(user_repo: Arc<U>, refresh_repo: Arc<R>) -> Self {
        Self {
            user_repo,
            refresh_repo,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<()> {
        // Confirm the user exists before touching anything
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Tokens first, then the row itself
        self.refresh_repo.delete_all_for_user(user_id).await?;
        self.user_repo.delete(user_id).await?;

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
