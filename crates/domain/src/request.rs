use serde::{Deserialize, Serialize};

/// One inbound classification request. Constructed per call, immutable.
///
/// `ip` and `user_agent` are caller-supplied context; they are echoed into
/// logs only and never influence the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl CheckRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ip: None,
            user_agent: None,
        }
    }
}
