//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with an email that is already taken
    #[error("A user with this email already exists")]
    EmailTaken,

    /// Wrong password or unknown email - deliberately the same message,
    /// so clients cannot enumerate accounts
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account exists but the email was never verified
    #[error("Account is not active, confirm your email first")]
    AccountInactive,

    /// Confirmation token failed signature or structural checks
    #[error("Token is invalid")]
    TokenInvalid,

    /// Confirmation token is past its expiry
    #[error("Token has expired")]
    TokenExpired,

    /// Access/refresh credential missing, malformed or expired
    #[error("Authentication required")]
    Unauthenticated,

    /// Refresh token is well-formed but no longer in the store
    #[error("Refresh token has been revoked")]
    RefreshRevoked,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Password policy violation
    #[error("Password validation failed: {0}")]
    PasswordPolicy(String),

    /// Input validation error (email format, names)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::AccountInactive => StatusCode::FORBIDDEN,
            AuthError::TokenInvalid | AuthError::TokenExpired => StatusCode::FORBIDDEN,
            AuthError::Unauthenticated | AuthError::RefreshRevoked => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::PasswordPolicy(_) | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated
            | AuthError::RefreshRevoked => ErrorKind::Unauthorized,
            AuthError::AccountInactive | AuthError::TokenInvalid | AuthError::TokenExpired => {
                ErrorKind::Forbidden
            }
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::PasswordPolicy(_) | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Storage and internal failures get a generic message; the detail
    /// stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid sign-in attempt");
            }
            AuthError::RefreshRevoked => {
                tracing::warn!("Refresh attempt with revoked token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::TokenInvalid,
        }
    }
}
