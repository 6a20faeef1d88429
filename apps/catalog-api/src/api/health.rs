//! Readiness endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    mongodb: bool,
}

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check: verifies the MongoDB connection with a ping
async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let mongodb_healthy = database::mongodb::check_health(&state.mongo_client).await;

    Json(ReadyResponse {
        status: if mongodb_healthy {
            "ready"
        } else {
            "unhealthy"
        }
        .to_string(),
        mongodb: mongodb_healthy,
    })
}
