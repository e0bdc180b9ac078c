use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::Envelope;

/// Request-boundary error. Every variant renders as the uniform response
/// envelope; nothing propagates past a handler unhandled.
#[derive(Debug)]
pub enum ApiError {
    /// Validation failure, unparsable body, or a storage-rejected write.
    BadRequest(String),
    /// No live row for the given id.
    NotFound(String),
    /// Unexpected storage or serialization fault. The cause is logged, the
    /// client sees a generic message.
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, "Bad Request", message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, "Not Found", message),
            Self::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Internal Server Error".to_string(),
                )
            }
        };

        (code, Json(Envelope::failure(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let response = ApiError::bad_request("title cannot be null").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::not_found("Todo with ID 3 Not Found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Internal(anyhow::anyhow!("pool closed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
