//! API middleware.

mod auth;
mod rate_limit;
mod request_log;

pub use auth::{auth_middleware, require_roles, CurrentUser};
pub use rate_limit::{rate_limit_auth_middleware, rate_limit_middleware};
pub use request_log::request_log_middleware;
