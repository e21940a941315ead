//! Request audit logging middleware.
//!
//! Records one row per handled request. The write is spawned off the
//! request path so a slow or failed audit insert never delays or fails
//! the response.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use super::rate_limit::client_identifier;
use crate::api::AppState;
use crate::domain::NewRequestLog;

/// Record method, path, query, status, latency and client address for
/// every request passing through the router.
pub async fn request_log_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(|q| q.to_string());
    let mut client_ip = client_identifier(&request);
    // Header-sourced identifiers are ASCII; the column is varchar(64)
    client_ip.truncate(64);

    let started = Instant::now();
    let response = next.run(request).await;
    let latency_ms = started.elapsed().as_millis() as i64;

    let status = response.status();
    let failed = status.is_client_error() || status.is_server_error();
    let entry = NewRequestLog {
        method,
        path,
        query,
        status_code: status.as_u16() as i16,
        succeeded: !failed,
        error: failed.then(|| status.canonical_reason().unwrap_or("error").to_string()),
        latency_ms,
        client_ip,
    };

    let log_service = state.log_service.clone();
    tokio::spawn(async move {
        if let Err(e) = log_service.record(entry).await {
            tracing::warn!(error = %e, "failed to persist request log");
        }
    });

    response
}
