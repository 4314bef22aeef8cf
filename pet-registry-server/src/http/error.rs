//! API error types with IntoResponse
//!
//! Every error renders as `{ "error": <message> }` with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::StoreError;
use crate::models::ValidationError;

/// Message returned when either name is missing or empty.
pub const NAMES_REQUIRED: &str = "Pet and owner names required";

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required name missing (402)
    Validation(ValidationError),

    /// Body is not JSON (400)
    BadRequest { message: String },

    /// Body could not be read, e.g. over the size limit
    Rejected { status: StatusCode, message: String },

    /// Store failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::PAYMENT_REQUIRED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => {
                tracing::debug!(field = e.field(), "rejected pet: {}", e);
                NAMES_REQUIRED.to_owned()
            }
            Self::BadRequest { message } | Self::Rejected { message, .. } => message,
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                "an internal error occurred".to_owned()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_402() {
        let err = ApiError::Validation(ValidationError::Empty { field: "petName" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Pet and owner names required" })
        );
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let err = ApiError::BadRequest {
            message: "expected JSON".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "expected JSON" }));
    }

    #[tokio::test]
    async fn rejected_keeps_status() {
        let err = ApiError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "length limit exceeded" })
        );
    }

    #[tokio::test]
    async fn store_error_is_500_and_opaque() {
        let err = ApiError::Store(StoreError::Unavailable("password=hunter2".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "an internal error occurred" }));
    }
}
