use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mailguard_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidEmail(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string())
            }

            DomainError::EmptyBatch | DomainError::BatchTooLarge { .. } => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::Unauthorized => (StatusCode::UNAUTHORIZED, self.0.to_string()),

            DomainError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.0.to_string()),

            DomainError::CacheError(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "cache unavailable".to_string())
            }

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
