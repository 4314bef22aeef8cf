//! OpenAPI document endpoint

use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;

use super::pets::PetsApi;

/// GET /api-docs/openapi.json
async fn openapi() -> Json<OpenApiDoc> {
    Json(PetsApi::openapi())
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
