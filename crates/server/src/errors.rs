use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use common::types::ErrorBody;
use service::errors::ServiceError;

/// JSON error response: `{"error": kind, "message": detail}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self { status, error, message: message.into() }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let status = match &e {
            ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.kind(), e.detail())
    }
}

// Malformed bodies are validation errors (400), not axum's default 422.
impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "validation", r.body_text())
    }
}

// Unparsable path segments such as `/students/abc`.
impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "validation", r.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = self.error, message = %self.message, "request failed");
        }
        let body = ErrorBody { error: self.error.to_string(), message: self.message };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::Validation("No fields to update".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Conflict("Customer ID already exists".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("Order"), StatusCode::NOT_FOUND),
            (ServiceError::Db("disk I/O error".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (e, status) in cases {
            assert_eq!(JsonApiError::from(e).status, status);
        }
    }

    #[test]
    fn not_found_message_is_plain() {
        let e = JsonApiError::from(ServiceError::not_found("Order"));
        assert_eq!(e.error, "not_found");
        assert_eq!(e.message, "Order not found");
    }
}
