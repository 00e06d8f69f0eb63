//! Script Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::ScriptRepository;
use crate::infra::postgres::PgScriptRepository;
use crate::presentation::handlers::{self, ScriptAppState};

/// Create the Script router with PostgreSQL repository
///
/// The caller is expected to wrap this router with
/// `auth::middleware::require_auth`.
pub fn script_router(repo: PgScriptRepository) -> Router {
    script_router_generic(repo)
}

/// Create a generic Script router for any repository implementation
pub fn script_router_generic<S>(repo: S) -> Router
where
    S: ScriptRepository + Clone + Send + Sync + 'static,
{
    let state = ScriptAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/create", post(handlers::create::<S>))
        .route(
            "/{id}",
            get(handlers::read::<S>)
                .put(handlers::update::<S>)
                .delete(handlers::delete::<S>),
        )
        .with_state(state)
}
