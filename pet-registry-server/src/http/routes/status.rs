//! Store reachability endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub database: bool,
}

/// GET /api/status
async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let database = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("store ping failed: {}", e);
            false
        }
    };

    Json(StatusResponse { database })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/status", get(status))
}
