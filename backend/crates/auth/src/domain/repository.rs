//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user. A concurrent duplicate registration surfaces as
    /// the storage layer's uniqueness violation, translated to
    /// `AuthError::EmailTaken`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Mark the user as active (email verified)
    async fn set_active(&self, user_id: &UserId) -> AuthResult<()>;

    /// Delete the user
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;
}

/// Refresh token repository trait
#[trait_variant::make(RefreshTokenRepository: Send)]
pub trait LocalRefreshTokenRepository {
    /// Persist an issued refresh token
    async fn create(&self, token: &RefreshToken) -> AuthResult<()>;

    /// Check whether a token is still in the store (i.e. not revoked)
    async fn exists(&self, token: &str) -> AuthResult<bool>;

    /// Remove one token (rotation)
    async fn delete(&self, token: &str) -> AuthResult<()>;

    /// Remove every token issued to a user (sign-out), returning the count
    async fn delete_all_for_user(&self, user_id: &UserId) -> AuthResult<u64>;

    /// Remove tokens past their expiry, returning the count
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
