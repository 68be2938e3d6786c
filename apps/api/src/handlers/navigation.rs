use axum::extract::Query;
use axum::{Extension, Json};

use achievehub_application::{RoleView, role_resolver};
use achievehub_core::AppError;
use achievehub_domain::AuthenticatedUser;
use serde::Deserialize;
use tower_sessions::Session;

use crate::dto::{
    DashboardWidgetResponse, NavigationItemResponse, QuickActionResponse, RoleViewResponse,
    RouteAccessResponse,
};
use crate::error::ApiResult;
use crate::handlers::session::SESSION_USER_KEY;

/// Header navigation for the current visitor. Public: anonymous visitors get
/// the public entries plus login/register.
pub async fn navigation_handler(
    session: Session,
) -> ApiResult<Json<Vec<NavigationItemResponse>>> {
    let user = session
        .get::<AuthenticatedUser>(SESSION_USER_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session user: {error}")))?;

    let items = role_resolver::navigation_items(user.as_ref())
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(items))
}

pub async fn role_view_handler(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<RoleViewResponse> {
    let view = RoleView::for_user(Some(&user));
    Json(RoleViewResponse::from_view(&view))
}

pub async fn dashboard_widgets_handler(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<Vec<DashboardWidgetResponse>> {
    let widgets = role_resolver::dashboard_widgets(Some(&user))
        .into_iter()
        .map(Into::into)
        .collect();

    Json(widgets)
}

pub async fn quick_actions_handler(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<Vec<QuickActionResponse>> {
    let actions = role_resolver::quick_actions(Some(&user))
        .into_iter()
        .map(Into::into)
        .collect();

    Json(actions)
}

#[derive(Debug, Deserialize)]
pub struct RouteAccessQuery {
    pub route: String,
}

pub async fn route_access_handler(
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<RouteAccessQuery>,
) -> Json<RouteAccessResponse> {
    let allowed = role_resolver::can_access_route(Some(&user), &query.route);

    Json(RouteAccessResponse {
        route: query.route,
        allowed,
    })
}
