//! API Server Entry Point
//!
//! Composition root: configuration, database pool, mail dispatcher, and
//! router wiring all happen here with explicit constructor injection.
//! Uses `anyhow` for startup errors; application-level errors use
//! `kernel::error::AppError`.

use auth::{AuthConfig, AuthMiddlewareState, PgAuthRepository, SmtpTokenSender, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use platform::mail::{MailDispatcher, Mailer, MailerConfig};
use scripts::{PgScriptRepository, script_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,scripts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired refresh tokens
    // Errors here should not prevent server startup
    let auth_repo_for_cleanup = PgAuthRepository::new(pool.clone());
    match auth_repo_for_cleanup.cleanup_expired().await {
        Ok(tokens) => {
            tracing::info!(tokens_deleted = tokens, "Refresh token cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Refresh token cleanup failed, continuing anyway"
            );
        }
    }

    // Auth configuration
    let auth_config = auth_config_from_env()?;

    // Outbound mail
    let mailer_config = mailer_config_from_env();
    let mailer = Mailer::from_config(&mailer_config)?;
    let dispatcher = MailDispatcher::start(mailer, &mailer_config);
    let token_sender =
        SmtpTokenSender::new(dispatcher, auth_config.verification_base_url.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Script routes sit behind the access-token middleware
    let auth_middleware = AuthMiddlewareState::new(auth_config.clone());
    let script_routes = script_router(PgScriptRepository::new(pool.clone())).layer(
        axum::middleware::from_fn(move |req: axum::extract::Request, next| {
            let state = auth_middleware.clone();
            async move { auth::middleware::require_auth(state, req, next).await }
        }),
    );

    // Build router
    let app = Router::new()
        .nest(
            "/v1/auth",
            auth_router(PgAuthRepository::new(pool.clone()), token_sender, auth_config),
        )
        .nest("/v1/script", script_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the auth configuration from the environment.
///
/// Debug builds fall back to random per-process secrets; production
/// requires the base64-encoded secrets to be set.
fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig {
            access_token_secret: decode_secret("AUTH_ACCESS_TOKEN_SECRET")?,
            refresh_token_secret: decode_secret("AUTH_REFRESH_TOKEN_SECRET")?,
            confirmation_token_secret: decode_secret("AUTH_CONFIRMATION_TOKEN_SECRET")?,
            ..AuthConfig::default()
        }
    };

    if let Ok(base_url) = env::var("PUBLIC_BASE_URL") {
        config.verification_base_url = base_url;
    }

    Ok(config)
}

fn decode_secret(var: &str) -> anyhow::Result<Vec<u8>> {
    let encoded =
        env::var(var).map_err(|_| anyhow::anyhow!("{} must be set in production", var))?;
    Ok(Engine::decode(&general_purpose::STANDARD, &encoded)?)
}

fn mailer_config_from_env() -> MailerConfig {
    let defaults = MailerConfig::default();

    MailerConfig {
        smtp_host: env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
        smtp_port: env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.smtp_port),
        username: env::var("SMTP_USERNAME").ok(),
        password: env::var("SMTP_PASSWORD").ok(),
        from: env::var("MAIL_FROM").unwrap_or(defaults.from),
        max_concurrent_sends: defaults.max_concurrent_sends,
        queue_capacity: defaults.queue_capacity,
    }
}
