//! Error types for the mock server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while serving mock requests or driving the server
/// lifecycle.
#[derive(Debug, Error)]
pub enum MockError {
    /// Request body was not a parsable `application/x-www-form-urlencoded`
    /// form with a `data` field.
    #[error("malformed form body: {0}")]
    MalformedForm(String),

    /// The `data` form field did not contain valid JSON of the expected shape.
    #[error("malformed data field: {0}")]
    MalformedData(String),

    /// Decoded input violated a shape constraint (empty filter list, bill
    /// without line items, ...).
    #[error("invalid request: {0}")]
    InvalidShape(String),

    /// `start` was called while the server is running or shutting down.
    #[error("server already started")]
    AlreadyStarted,

    /// Failed to bind the listening socket.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for mock server operations.
pub type Result<T> = core::result::Result<T, MockError>;

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let (status, category) = match &self {
            MockError::MalformedForm(_) => (StatusCode::BAD_REQUEST, "malformed_form"),
            MockError::MalformedData(_) => (StatusCode::BAD_REQUEST, "malformed_data"),
            MockError::InvalidShape(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        tracing::warn!(error = %self, "request rejected");

        let body = Json(serde_json::json!({
            "error": category,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_map_to_400() {
        for err in [
            MockError::MalformedForm("no body".into()),
            MockError::MalformedData("not json".into()),
            MockError::InvalidShape("empty filters".into()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_lifecycle_errors_map_to_500() {
        let err = MockError::AlreadyStarted;
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
