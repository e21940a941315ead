//! JWT authentication and role authorization middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, ROLE_ADMIN};
use crate::errors::AppError;

/// Authenticated principal extracted from a verified JWT token.
///
/// Handlers receive it explicitly through request extensions; there is no
/// ambient security context. It is also the `/user/info` response payload.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct CurrentUser {
    /// User id
    #[schema(example = 1)]
    pub id: i64,
    /// Username
    #[schema(example = "alice")]
    pub username: String,
    /// Role names held by the user
    #[schema(example = json!(["USER"]))]
    pub roles: Vec<String>,
}

impl CurrentUser {
    /// Check if user holds the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user holds any of the given roles.
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }

    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then injects the CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    let current_user = CurrentUser {
        id: claims.sub,
        username: claims.username,
        roles: claims.roles,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Role authorization middleware.
///
/// Evaluates the required role set against the authenticated principal
/// before the handler runs. Layer it inside `auth_middleware` so the
/// principal is already in the extensions:
///
/// ```rust,ignore
/// get(menu_list).route_layer(middleware::from_fn(|req, next| {
///     require_roles(MENU_ROLES, req, next)
/// }))
/// ```
pub async fn require_roles(
    allowed: &'static [&'static str],
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.has_any_role(allowed) {
        tracing::warn!(
            user_id = user.id,
            required = ?allowed,
            held = ?user.roles,
            "role check refused request"
        );
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROLE_USER;

    fn user_with_roles(roles: &[&str]) -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "alice".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn has_any_role_matches_one_of_several() {
        let user = user_with_roles(&[ROLE_USER]);
        assert!(user.has_any_role(&[ROLE_ADMIN, ROLE_USER]));
        assert!(!user.has_any_role(&[ROLE_ADMIN]));
    }

    #[test]
    fn admin_check_requires_admin_role() {
        assert!(user_with_roles(&[ROLE_ADMIN]).is_admin());
        assert!(!user_with_roles(&[ROLE_USER]).is_admin());
        assert!(!user_with_roles(&[]).is_admin());
    }
}
