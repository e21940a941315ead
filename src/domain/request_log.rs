//! Request log domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One persisted request record.
///
/// Passive audit data; nothing in the application reads these back except
/// the admin listing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RequestLog {
    pub id: i64,
    /// HTTP method
    #[schema(example = "POST")]
    pub method: String,
    /// Request path without the query string
    #[schema(example = "/user/register")]
    pub path: String,
    /// Raw query string, if any
    pub query: Option<String>,
    /// Response status code
    #[schema(example = 200)]
    pub status_code: i16,
    /// Whether the response was a non-error (status < 400)
    pub succeeded: bool,
    /// Canonical reason phrase for error responses
    pub error: Option<String>,
    /// Wall-clock handling time in milliseconds
    pub latency_ms: i64,
    /// Client address as derived from proxy headers or the peer socket
    pub client_ip: String,
    pub created_at: DateTime<Utc>,
}

/// Fields captured by the logging middleware for a new record.
#[derive(Debug, Clone)]
pub struct NewRequestLog {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub status_code: i16,
    pub succeeded: bool,
    pub error: Option<String>,
    pub latency_ms: i64,
    pub client_ip: String,
}
