use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::Response;

use achievehub_core::AppError;
use achievehub_domain::AuthenticatedUser;
use tower_sessions::Session;

use crate::error::ApiResult;
use crate::handlers::session::SESSION_USER_KEY;
use crate::state::AppState;

pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let user = session
        .get::<AuthenticatedUser>(SESSION_USER_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session user: {error}")))?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method()) {
        let headers = request.headers();

        if let Some(fetch_site) = headers.get("sec-fetch-site") {
            if fetch_site == HeaderValue::from_static("cross-site") {
                return Err(AppError::Unauthorized("cross-site request blocked".to_owned()).into());
            }
        }

        let origin = headers
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let referer = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let allowed_origin = state.frontend_url;
        let origin_is_allowed = origin == allowed_origin;
        let referer_is_allowed = referer_matches_origin(referer, &allowed_origin);

        if !origin_is_allowed && !referer_is_allowed {
            return Err(AppError::Unauthorized("origin validation failed".to_owned()).into());
        }
    }

    Ok(next.run(request).await)
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

// A bare prefix check would accept `http://localhost:30001` for an allowed
// origin of `http://localhost:3000`; the remainder after the origin must be
// empty or start a path.
fn referer_matches_origin(referer: &str, allowed_origin: &str) -> bool {
    referer
        .strip_prefix(allowed_origin)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::referer_matches_origin;

    const ORIGIN: &str = "http://localhost:3000";

    #[test]
    fn referer_matches_exact_origin_and_paths() {
        assert!(referer_matches_origin("http://localhost:3000", ORIGIN));
        assert!(referer_matches_origin("http://localhost:3000/login", ORIGIN));
    }

    #[test]
    fn referer_with_colliding_origin_prefix_is_rejected() {
        assert!(!referer_matches_origin("http://localhost:30001/login", ORIGIN));
        assert!(!referer_matches_origin("http://localhost:3000.evil.example/", ORIGIN));
        assert!(!referer_matches_origin("", ORIGIN));
    }
}
