use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL. When unset, the in-process cache backend
    /// is used instead (single-node deployments, tests).
    #[serde(default)]
    pub redis_url: Option<String>,
}
