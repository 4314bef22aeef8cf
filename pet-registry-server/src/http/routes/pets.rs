//! Pet endpoints
//!
//! Both verbs answer with the full record set, `{ "pets": [...] }`.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{OpenApi, ToSchema};

use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewPet, Pet};

/// Create pet request, as documented.
///
/// The handler reads the body as raw JSON so that falsy or wrongly typed
/// names are reported as missing names rather than as a malformed body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    /// Name of the pet
    #[schema(value_type = Option<String>)]
    pub pet_name: Option<Value>,
    /// Name of the owner
    #[schema(value_type = Option<String>)]
    pub owner_name: Option<Value>,
}

/// Pet list response
#[derive(Debug, Serialize, ToSchema)]
pub struct PetsResponse {
    pub pets: Vec<Pet>,
}

/// Retrieves a list of all pets from the database
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = "pets",
    responses(
        (status = 200, description = "A list of all pets", body = PetsResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
async fn list_pets(State(state): State<Arc<AppState>>) -> Result<Json<PetsResponse>, ApiError> {
    let pets = state.store.list().await?;
    Ok(Json(PetsResponse { pets }))
}

/// Adds a new pet to the database
#[utoipa::path(
    post,
    path = "/api/pets",
    tag = "pets",
    request_body = CreatePetRequest,
    responses(
        (status = 200, description = "List of all pets", body = PetsResponse),
        (status = 400, description = "Body is not JSON", body = ErrorBody),
        (status = 402, description = "Pet and owner names required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
async fn create_pet(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<PetsResponse>, ApiError> {
    let pet = NewPet::from_body(&body)?;
    tracing::debug!(name = pet.name.as_str(), owner = pet.owner.as_str(), "creating pet");

    let pets = state.store.insert_and_list(pet).await?;
    Ok(Json(PetsResponse { pets }))
}

/// OpenAPI description of the pet endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_pets, create_pet),
    components(schemas(Pet, PetsResponse, CreatePetRequest, ErrorBody)),
    tags((name = "pets", description = "Pet records"))
)]
pub struct PetsApi;

/// Pet routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/pets", get(list_pets).post(create_pet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_both_operations() {
        let doc = serde_json::to_value(PetsApi::openapi()).unwrap();
        let pets = &doc["paths"]["/api/pets"];

        assert!(pets["get"].is_object());
        assert!(pets["post"].is_object());
        assert!(pets["post"]["responses"]["402"].is_object());
        assert!(pets["get"]["responses"]["500"].is_object());
    }

    #[test]
    fn openapi_uses_table_casing_for_records() {
        let doc = serde_json::to_value(PetsApi::openapi()).unwrap();
        let props = &doc["components"]["schemas"]["Pet"]["properties"];

        assert!(props["ID"].is_object());
        assert!(props["Name"].is_object());
        assert!(props["Owner"].is_object());
    }
}
