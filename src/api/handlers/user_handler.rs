//! User handlers.

use axum::{
    extract::{Extension, State},
    middleware,
    routing::get,
    Router,
};

use crate::api::middleware::{require_roles, CurrentUser};
use crate::api::AppState;
use crate::config::MENU_ROLES;
use crate::domain::Menu;
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/info", get(info))
        .route(
            "/user/menuList",
            get(menu_list).route_layer(middleware::from_fn(|req, next| {
                require_roles(MENU_ROLES, req, next)
            })),
        )
}

/// Get the authenticated principal
#[utoipa::path(
    get,
    path = "/user/info",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current principal", body = CurrentUser),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn info(
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<ApiResponse<CurrentUser>> {
    // Pure accessor: the principal comes straight from the verified token
    Ok(ApiResponse::ok(current_user))
}

/// List navigation menus (any authenticated role)
#[utoipa::path(
    get,
    path = "/user/menuList",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All menus in display order", body = Vec<Menu>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller holds none of the required roles")
    )
)]
pub async fn menu_list(
    Extension(_current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Menu>>> {
    let menus = state.menu_service.list().await?;
    Ok(ApiResponse::ok(menus))
}
