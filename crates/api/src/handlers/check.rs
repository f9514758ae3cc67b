use crate::dto::CheckEmailResponse;
use crate::errors::ApiError;
use crate::middleware::ApiIdentity;
use crate::state::AppState;
use axum::{extract::State, Extension, Json};
use mailguard_domain::CheckRequest;
use tracing::debug;

pub async fn check_email(
    State(state): State<AppState>,
    Extension(identity): Extension<ApiIdentity>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckEmailResponse>, ApiError> {
    let verdict = state.check_email.execute(&request).await?;
    debug!(
        email = %request.email,
        classification = %verdict.classification.as_str(),
        "Classified email"
    );

    let usage = state.usage.clone();
    tokio::spawn(async move { usage.record(&identity.0).await });

    Ok(Json(verdict.into()))
}
