use super::api_key::ApiIdentity;
use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use mailguard_application::services::{RateDecision, ANONYMOUS_IDENTITY};
use mailguard_domain::DomainError;
use tracing::debug;

/// Fixed-window rate limiting, keyed by the identity the auth
/// middleware accepted. Runs strictly after authentication so rejected
/// keys never consume window budget.
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = request
        .extensions()
        .get::<ApiIdentity>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| ANONYMOUS_IDENTITY.to_string());

    if state.rate_limiter.check(&identity).await == RateDecision::Limited {
        debug!(identity = %identity, "Request rejected by rate limiter");
        return Err(DomainError::RateLimited.into());
    }

    Ok(next.run(request).await)
}
