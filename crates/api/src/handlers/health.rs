use crate::dto::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        region: state.region.clone(),
    })
}
