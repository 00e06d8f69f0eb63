//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes. Validation
//! is purely cryptographic (access tokens are stateless), so no repository
//! is needed here.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenIssuer;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenIssuer>,
    pub config: Arc<AuthConfig>,
}

impl AuthMiddlewareState {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            tokens: Arc::new(TokenIssuer::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

/// The authenticated caller, stored in request extensions by [`require_auth`]
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid access token
pub async fn require_auth(
    state: AuthMiddlewareState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_cookie(req.headers(), &state.config.access_cookie_name);

    let user_id = match token {
        Some(token) => state.tokens.decode_access(&token),
        None => Err(AuthError::Unauthenticated),
    };

    match user_id {
        Ok(user_id) => {
            req.extensions_mut().insert(CurrentUser { user_id });
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}
