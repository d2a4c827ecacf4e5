//! Custom error types for the users service

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{models::ErrorEnvelope, response::json_body};

/// Custom error type for the users service
///
/// Every variant is answered the same way: status 500 and the error text in
/// the `{"message": ...}` envelope. Client mistakes such as a duplicate
/// username are not told apart from server faults.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be read
    #[error("{0}")]
    Body(#[from] BytesRejection),

    /// The request body is not a valid user payload
    #[error("{0}")]
    Json(#[source] serde_json::Error),

    /// Storage rejected or failed the operation
    #[error("{0}")]
    Database(#[from] common::error::DatabaseError),

    /// A response payload could not be encoded
    #[error("{0}")]
    Serialization(#[source] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope {
            message: self.to_string(),
        };

        json_body(StatusCode::INTERNAL_SERVER_ERROR, &envelope)
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::header};
    use common::error::DatabaseError;

    #[tokio::test]
    async fn test_error_renders_message_envelope() {
        let err = ApiError::Database(DatabaseError::Configuration("boom".to_string()));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            crate::response::APPLICATION_JSON
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            &body[..],
            b"{\"message\":\"Database configuration error: boom\"}\n"
        );
    }

    #[tokio::test]
    async fn test_decode_error_keeps_decoder_text() {
        let source = serde_json::from_slice::<crate::models::CreateUserRequest>(b"not valid json")
            .unwrap_err();
        let expected = source.to_string();

        let response = ApiError::Json(source).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], expected);
    }
}
