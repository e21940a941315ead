//! API layer - everything that speaks HTTP
//!
//! Handlers, the middleware stack (authentication, role guards, rate
//! limiting, request logging), custom extractors, route wiring and the
//! OpenAPI document.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
