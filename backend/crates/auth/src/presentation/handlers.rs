//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use platform::cookie::{CookieConfig, extract_cookie};

use crate::application::config::AuthConfig;
use crate::application::{
    DeleteUserUseCase, GetUserUseCase, RefreshSessionInput, RefreshSessionUseCase, SignInInput,
    SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase, TokenIssuer, TokenSender,
    VerifyEmailInput, VerifyEmailUseCase,
};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    RefreshResponse, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
    UserInfoResponse, VerifyEmailResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, M>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub sender: Arc<M>,
    pub tokens: Arc<TokenIssuer>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /v1/auth/sign-up
pub async fn sign_up<R, M>(
    State(state): State<AuthAppState<R, M>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.sender.clone(),
        state.tokens.clone(),
    );

    let input = SignUpInput {
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            user_id: output.user_id,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /v1/auth/sign-in
pub async fn sign_in<R, M>(
    State(state): State<AuthAppState<R, M>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.tokens.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::OK,
        set_token_cookies(&state.config, &output.access.token, &output.refresh.token),
        Json(SignInResponse {
            user_id: output.user_id,
        }),
    ))
}

// ============================================================================
// Email Verification
// ============================================================================

/// GET /v1/auth/verify/{token}
pub async fn verify_email<R, M>(
    State(state): State<AuthAppState<R, M>>,
    Path(token): Path<String>,
) -> AuthResult<Json<VerifyEmailResponse>>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let use_case = VerifyEmailUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case.execute(VerifyEmailInput { token }).await?;

    Ok(Json(VerifyEmailResponse {
        email: output.email,
    }))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /v1/auth/refresh
pub async fn refresh<R, M>(
    State(state): State<AuthAppState<R, M>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let refresh_token = extract_cookie(&headers, &state.config.refresh_cookie_name)
        .ok_or(AuthError::Unauthenticated)?;

    let use_case = RefreshSessionUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(RefreshSessionInput { refresh_token })
        .await?;

    Ok((
        StatusCode::OK,
        set_token_cookies(&state.config, &output.access.token, &output.refresh.token),
        Json(RefreshResponse {
            user_id: output.user_id,
        }),
    ))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /v1/auth/whoami
pub async fn whoami<R, M>(
    State(state): State<AuthAppState<R, M>>,
    headers: HeaderMap,
) -> AuthResult<Json<UserInfoResponse>>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let user_id = authenticated_user(&state, &headers)?;

    let use_case = GetUserUseCase::new(state.repo.clone());
    let output = use_case.execute(&user_id).await?;

    Ok(Json(UserInfoResponse {
        user_id: output.user_id,
        email: output.email,
        first_name: output.first_name,
        last_name: output.last_name,
        is_active: output.is_active,
        is_superuser: output.is_superuser,
        joined_at: output.joined_at,
    }))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /v1/auth/sign-out
pub async fn sign_out<R, M>(
    State(state): State<AuthAppState<R, M>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    // Revoke tokens when the caller still holds a valid access token;
    // clear the cookies either way
    if let Ok(user_id) = authenticated_user(&state, &headers) {
        let use_case = SignOutUseCase::new(state.repo.clone());
        use_case.execute(&user_id).await?;
    }

    Ok((StatusCode::NO_CONTENT, clear_token_cookies(&state.config)))
}

// ============================================================================
// Delete User
// ============================================================================

/// DELETE /v1/auth/me
pub async fn delete_user<R, M>(
    State(state): State<AuthAppState<R, M>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let user_id = authenticated_user(&state, &headers)?;

    let use_case = DeleteUserUseCase::new(state.repo.clone(), state.repo.clone());
    use_case.execute(&user_id).await?;

    Ok((StatusCode::NO_CONTENT, clear_token_cookies(&state.config)))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the caller from the access cookie
fn authenticated_user<R, M>(
    state: &AuthAppState<R, M>,
    headers: &HeaderMap,
) -> AuthResult<UserId>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
    M: TokenSender + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(headers, &state.config.access_cookie_name)
        .ok_or(AuthError::Unauthenticated)?;

    state.tokens.decode_access(&token)
}

fn access_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.access_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.access_token_ttl_secs),
    }
}

fn refresh_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.refresh_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.refresh_token_ttl_secs),
    }
}

fn set_token_cookies(
    config: &AuthConfig,
    access_token: &str,
    refresh_token: &str,
) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            header::SET_COOKIE,
            access_cookie(config).build_set_cookie(access_token),
        ),
        (
            header::SET_COOKIE,
            refresh_cookie(config).build_set_cookie(refresh_token),
        ),
    ])
}

fn clear_token_cookies(config: &AuthConfig) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            header::SET_COOKIE,
            access_cookie(config).build_delete_cookie(),
        ),
        (
            header::SET_COOKIE,
            refresh_cookie(config).build_delete_cookie(),
        ),
    ])
}
