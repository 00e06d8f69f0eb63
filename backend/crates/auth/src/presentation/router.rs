//! Auth Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_sender::TokenSender;
use crate::application::tokens::TokenIssuer;
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::infra::mailer::SmtpTokenSender;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository and SMTP sender
pub fn auth_router(repo: PgAuthRepository, sender: SmtpTokenSender, config: AuthConfig) -> Router {
    auth_router_generic(repo, sender, config)
}

/// Create a generic Auth router for any repository/sender implementation
pub fn auth_router_generic<R, M>(repo: R, sender: M, config: AuthConfig) -> Router
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        sender: Arc::new(sender),
        tokens: Arc::new(TokenIssuer::from_config(&config)),
        config: Arc::new(config),
    };

    Router::new()
        .route("/sign-up", post(handlers::sign_up::<R, M>))
        .route("/sign-in", post(handlers::sign_in::<R, M>))
        .route("/verify/{token}", get(handlers::verify_email::<R, M>))
        .route("/refresh", post(handlers::refresh::<R, M>))
        .route("/whoami", get(handlers::whoami::<R, M>))
        .route("/sign-out", post(handlers::sign_out::<R, M>))
        .route("/me", delete(handlers::delete_user::<R, M>))
        .with_state(state)
}
