use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    /// Newline-delimited blocklist file; `#` lines are comments.
    #[serde(default = "default_blocklist_path")]
    pub blocklist_path: String,

    /// Score at or above which an address is classified `suspect`.
    #[serde(default = "default_soft_threshold")]
    pub soft_threshold: f64,

    /// Score at or above which an address is classified `disposable`.
    #[serde(default = "default_disposable_threshold")]
    pub disposable_threshold: f64,

    /// Upper bound on a single live MX query.
    #[serde(default = "default_mx_timeout_ms")]
    pub mx_timeout_ms: u64,

    /// TTL for cached MX presence flags.
    #[serde(default = "default_mx_cache_ttl_seconds")]
    pub mx_cache_ttl_seconds: u64,

    /// `ttl_seconds` advertised in classification results.
    #[serde(default = "default_result_ttl_seconds")]
    pub result_ttl_seconds: u64,

    /// Scoring version string echoed in every result.
    #[serde(default = "default_version")]
    pub version: String,

    /// Interval between background blocklist reloads.
    #[serde(default = "default_blocklist_refresh_seconds")]
    pub blocklist_refresh_seconds: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            blocklist_path: default_blocklist_path(),
            soft_threshold: default_soft_threshold(),
            disposable_threshold: default_disposable_threshold(),
            mx_timeout_ms: default_mx_timeout_ms(),
            mx_cache_ttl_seconds: default_mx_cache_ttl_seconds(),
            result_ttl_seconds: default_result_ttl_seconds(),
            version: default_version(),
            blocklist_refresh_seconds: default_blocklist_refresh_seconds(),
        }
    }
}

fn default_blocklist_path() -> String {
    "blocklist.txt".to_string()
}

fn default_soft_threshold() -> f64 {
    0.4
}

fn default_disposable_threshold() -> f64 {
    0.8
}

fn default_mx_timeout_ms() -> u64 {
    1_500
}

fn default_mx_cache_ttl_seconds() -> u64 {
    86_400
}

fn default_result_ttl_seconds() -> u64 {
    86_400
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_blocklist_refresh_seconds() -> u64 {
    86_400
}
