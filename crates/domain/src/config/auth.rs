use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Accepted bearer tokens. Empty means the API is open and callers
    /// are tracked under the `anonymous` identity.
    #[serde(default)]
    pub api_keys: Vec<String>,
}

impl AuthConfig {
    pub fn open_access(&self) -> bool {
        self.api_keys.is_empty()
    }
}
