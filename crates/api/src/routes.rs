use crate::handlers::{bulk, check, health};
use crate::middleware::{enforce_rate_limit, require_api_key};
use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

/// Builds the HTTP router.
///
/// The classification routes sit behind authentication and the rate
/// limiter; the auth layer runs first so the limiter always sees the
/// accepted identity. The health probe stays open for orchestrators.
pub fn create_api_routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/v1/check-email", post(check::check_email))
        .route("/v1/check-bulk", post(bulk::check_bulk))
        .layer(from_fn_with_state(state.clone(), enforce_rate_limit))
        .layer(from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .route("/health", get(health::health))
        .merge(protected)
        .with_state(state)
}
