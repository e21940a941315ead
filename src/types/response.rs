use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Uniform result envelope carried by every endpoint.
///
/// `code` mirrors the HTTP status so clients reading only the body agree
/// with clients reading only the status line. `data` is omitted from the
/// JSON entirely when there is no payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response with a payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Successful response with a payload and a custom message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: message.into(),
            data: None,
        }
    }

    /// Failure envelope; used by the error boundary.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_carries_data() {
        let body = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(body["code"], 200);
        assert_eq!(body["message"], "success");
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn message_envelope_omits_data_field() {
        let body = serde_json::to_value(ApiResponse::message("registration succeeded")).unwrap();
        assert_eq!(body["code"], 200);
        assert_eq!(body["message"], "registration succeeded");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn error_envelope_mirrors_status() {
        let body = serde_json::to_value(ApiResponse::error(409, "username already registered"))
            .unwrap();
        assert_eq!(body["code"], 409);
        assert_eq!(body["message"], "username already registered");
        assert!(body.get("data").is_none());
    }
}
