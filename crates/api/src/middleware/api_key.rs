use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use mailguard_application::services::ANONYMOUS_IDENTITY;
use mailguard_domain::DomainError;

/// Identity accepted by the auth middleware, stashed in request
/// extensions for the rate limiter and usage recorder downstream.
#[derive(Debug, Clone)]
pub struct ApiIdentity(pub String);

/// Bearer-token authentication.
///
/// With no keys configured the API is open and every caller shares the
/// anonymous identity. Otherwise the token must match one configured
/// key; comparison is timing-safe per candidate.
pub async fn require_api_key(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if state.api_keys.is_empty() {
        request
            .extensions_mut()
            .insert(ApiIdentity(ANONYMOUS_IDENTITY.to_string()));
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(&request).ok_or(DomainError::Unauthorized)?;

    let accepted = state
        .api_keys
        .iter()
        .any(|key| timing_safe_eq(token.as_bytes(), key.as_bytes()));
    if !accepted {
        return Err(DomainError::Unauthorized.into());
    }

    request.extensions_mut().insert(ApiIdentity(token));
    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> Option<String> {
    let header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())?;
    let token = header.strip_prefix("Bearer").unwrap_or(header).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
