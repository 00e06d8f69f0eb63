//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations, SMTP token sender
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User signup with email + password, inactive until verified
//! - Email verification via signed confirmation tokens
//! - Signin issuing an access/refresh JWT pair (cookie transport)
//! - Refresh with rotation; signout revokes all refresh tokens
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Three token classes with distinct secrets and TTLs
//! - Refresh tokens persisted server-side so they can be revoked
//! - Unknown email and wrong password are indistinguishable to clients

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::tokens::TokenIssuer;
pub use error::{AuthError, AuthResult};
pub use infra::mailer::SmtpTokenSender;
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthMiddlewareState, CurrentUser};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
