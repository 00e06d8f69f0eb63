//! Script Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Script-specific result type alias
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Script-specific error variants
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Script not found
    #[error("Script not found")]
    NotFound,

    /// The caller does not own the script
    #[error("You do not have access to this script")]
    AccessDenied,

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScriptError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScriptError::NotFound => StatusCode::NOT_FOUND,
            ScriptError::AccessDenied => StatusCode::FORBIDDEN,
            ScriptError::Validation(_) => StatusCode::BAD_REQUEST,
            ScriptError::Database(_) | ScriptError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::NotFound => ErrorKind::NotFound,
            ScriptError::AccessDenied => ErrorKind::Forbidden,
            ScriptError::Validation(_) => ErrorKind::BadRequest,
            ScriptError::Database(_) | ScriptError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, keeping storage detail out of responses
    pub fn to_app_error(&self) -> AppError {
        match self {
            ScriptError::Database(_) | ScriptError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ScriptError::Database(e) => {
                tracing::error!(error = %e, "Script database error");
            }
            ScriptError::Internal(msg) => {
                tracing::error!(message = %msg, "Script internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Script error");
            }
        }
    }
}

impl IntoResponse for ScriptError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ScriptError {
    fn from(err: AppError) -> Self {
        ScriptError::Internal(err.to_string())
    }
}
