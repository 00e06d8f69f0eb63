//! Scripts Backend Module
//!
//! CRUD for the user-owned "script" resource.
//!
//! Clean Architecture structure:
//! - `domain/` - Script entity, value objects, repository trait
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every operation requires an authenticated caller and enforces
//! ownership, reads included.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ScriptError, ScriptResult};
pub use infra::postgres::PgScriptRepository;
pub use presentation::router::script_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

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
