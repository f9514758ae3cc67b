use crate::dto::{BulkCheckRequest, BulkCheckResponse};
use crate::errors::ApiError;
use crate::middleware::ApiIdentity;
use crate::state::AppState;
use axum::{extract::State, Extension, Json};

pub async fn check_bulk(
    State(state): State<AppState>,
    Extension(identity): Extension<ApiIdentity>,
    Json(request): Json<BulkCheckRequest>,
) -> Result<Json<BulkCheckResponse>, ApiError> {
    let outcome = state.check_bulk.execute(&request.emails).await?;

    let usage = state.usage.clone();
    tokio::spawn(async move { usage.record(&identity.0).await });

    Ok(Json(BulkCheckResponse {
        results: outcome.results.into_iter().map(Into::into).collect(),
        metrics: outcome.metrics.into(),
    }))
}
