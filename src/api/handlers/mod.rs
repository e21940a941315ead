//! HTTP request handlers.

pub mod auth_handler;
pub mod log_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use log_handler::log_routes;
pub use user_handler::user_routes;
