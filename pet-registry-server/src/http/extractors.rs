//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body parsed regardless of `Content-Type`.
///
/// Browsers posting a string body send `text/plain`, so the header is not
/// checked. Rejections render as `ApiError` instead of axum's plain text.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest {
            message: format!("invalid JSON body: {}", e),
        })?;

        Ok(Self(value))
    }
}
