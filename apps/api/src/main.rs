//! Achieve Hub API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use achievehub_application::{AuthGateway, AuthService};
use achievehub_core::AppError;
use achievehub_infrastructure::{HttpAuthGateway, InMemoryAuthGateway};
use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::info;

use crate::api_config::{ApiConfig, AuthProviderConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let gateway: Arc<dyn AuthGateway> = match &config.auth_provider {
        AuthProviderConfig::Memory => {
            info!("using seeded in-memory accounts (development mode)");
            Arc::new(InMemoryAuthGateway::with_demo_accounts())
        }
        AuthProviderConfig::Http(upstream_url) => {
            info!(%upstream_url, "using upstream portal backend");
            Arc::new(HttpAuthGateway::new(upstream_url)?)
        }
    };

    let app_state = AppState {
        auth_service: AuthService::new(gateway),
        frontend_url: config.frontend_url.clone(),
    };

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(30)));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&config.frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let protected_routes = Router::new()
        .route("/auth/me", get(handlers::session::me_handler))
        .route("/api/role", get(handlers::navigation::role_view_handler))
        .route(
            "/api/dashboard/widgets",
            get(handlers::navigation::dashboard_widgets_handler),
        )
        .route(
            "/api/dashboard/quick-actions",
            get(handlers::navigation::quick_actions_handler),
        )
        .route(
            "/api/routes/access",
            get(handlers::navigation::route_access_handler),
        )
        .route_layer(from_fn(middleware::require_auth));

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/navigation",
            get(handlers::navigation::navigation_handler),
        )
        .route("/auth/login", post(handlers::session::login_handler))
        .route("/auth/register", post(handlers::session::register_handler))
        .route("/auth/logout", post(handlers::session::logout_handler))
        .merge(protected_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(session_layer)
        .with_state(app_state);

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "achievehub-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
