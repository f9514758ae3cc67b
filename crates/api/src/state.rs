use mailguard_application::services::{RateLimiter, UsageRecorder};
use mailguard_application::use_cases::{CheckBulkUseCase, CheckEmailUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_email: Arc<CheckEmailUseCase>,
    pub check_bulk: Arc<CheckBulkUseCase>,
    pub rate_limiter: Arc<RateLimiter>,
    pub usage: Arc<UsageRecorder>,
    pub api_keys: Arc<Vec<String>>,
    pub region: Option<String>,
}
