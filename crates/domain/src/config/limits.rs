use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Fixed-window request budget per API key per second. 0 disables
    /// rate limiting.
    #[serde(default = "default_rate_limit_per_second")]
    pub rate_limit_per_second: i64,

    /// Maximum number of emails accepted in one bulk request.
    #[serde(default = "default_max_bulk_batch")]
    pub max_bulk_batch: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            rate_limit_per_second: default_rate_limit_per_second(),
            max_bulk_batch: default_max_bulk_batch(),
        }
    }
}

fn default_rate_limit_per_second() -> i64 {
    10
}

fn default_max_bulk_batch() -> usize {
    100
}
