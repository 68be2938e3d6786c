use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use achievehub_application::{Credentials, Registration};
use achievehub_core::AppError;
use achievehub_domain::AuthenticatedUser;
use tower_sessions::Session;

use crate::dto::{LoginRequest, RegisterRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// Session key holding the upstream bearer token.
pub const SESSION_TOKEN_KEY: &str = "auth.token";
/// Session key holding the authenticated user snapshot.
pub const SESSION_USER_KEY: &str = "auth.user";

async fn store_session(
    session: &Session,
    token: &str,
    user: &AuthenticatedUser,
) -> Result<(), AppError> {
    // Rotate the session id on every credential exchange.
    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to rotate session id: {error}")))?;
    session
        .insert(SESSION_TOKEN_KEY, token)
        .await
        .map_err(|error| AppError::Internal(format!("failed to store session token: {error}")))?;
    session
        .insert(SESSION_USER_KEY, user)
        .await
        .map_err(|error| AppError::Internal(format!("failed to store session user: {error}")))
}

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<AuthenticatedUser>> {
    let credentials = Credentials::from(payload);
    let auth_session = state.auth_service.login(&credentials).await?;

    store_session(&session, &auth_session.token, &auth_session.user).await?;
    Ok(Json(auth_session.user))
}

pub async fn register_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthenticatedUser>)> {
    let registration = Registration::from(payload);
    let auth_session = state.auth_service.register(&registration).await?;

    store_session(&session, &auth_session.token, &auth_session.user).await?;
    Ok((StatusCode::CREATED, Json(auth_session.user)))
}

pub async fn logout_handler(session: Session) -> ApiResult<StatusCode> {
    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Refreshes the user snapshot against the auth gateway and returns it.
pub async fn me_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<AuthenticatedUser>> {
    let token = session
        .get::<String>(SESSION_TOKEN_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session token: {error}")))?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    let user = state.auth_service.current_user(&token).await?;
    session
        .insert(SESSION_USER_KEY, &user)
        .await
        .map_err(|error| AppError::Internal(format!("failed to store session user: {error}")))?;

    Ok(Json(user))
}
