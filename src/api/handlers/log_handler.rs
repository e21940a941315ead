//! Request log handlers.

use axum::{
    extract::{Extension, Query, State},
    middleware,
    routing::get,
    Router,
};

use crate::api::middleware::{require_roles, CurrentUser};
use crate::api::AppState;
use crate::config::ROLE_ADMIN;
use crate::domain::RequestLog;
use crate::errors::AppResult;
use crate::types::{ApiResponse, Paginated, PaginationParams};

/// Create request log routes
pub fn log_routes() -> Router<AppState> {
    Router::new().route(
        "/log/list",
        get(list).route_layer(middleware::from_fn(|req, next| {
            require_roles(&[ROLE_ADMIN], req, next)
        })),
    )
}

/// List request logs, newest first (admin only)
#[utoipa::path(
    get,
    path = "/log/list",
    tag = "Logs",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page, capped server-side")
    ),
    responses(
        (status = 200, description = "One page of request logs plus pagination metadata"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list(
    Extension(_current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<ApiResponse<Paginated<RequestLog>>> {
    let page = state.log_service.list(pagination).await?;
    Ok(ApiResponse::ok(page))
}
