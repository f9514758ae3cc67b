use chrono::{DateTime, Utc};
use mailguard_domain::{Classification, Verdict};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CheckEmailResponse {
    pub email: String,
    pub domain: String,
    pub classification: Classification,
    pub score: f64,
    pub reasons: Vec<String>,
    pub ttl_seconds: u64,
    pub checked_at: DateTime<Utc>,
    pub version: String,
}

impl From<Verdict> for CheckEmailResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            email: verdict.email,
            domain: verdict.domain,
            classification: verdict.classification,
            score: verdict.score,
            reasons: verdict.reasons,
            ttl_seconds: verdict.ttl_seconds,
            checked_at: verdict.checked_at,
            version: verdict.version,
        }
    }
}
