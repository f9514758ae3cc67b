use crate::ports::KvCache;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const USAGE_TTL: Duration = Duration::from_secs(86_400);

/// Per-key daily request counter, used for usage accounting.
///
/// Key format: `usage:{api_key}:{YYYYMMDD}`, expiring a day after the
/// first request of that day. Recording is fire-and-forget; failures are
/// logged at debug level and never affect the request.
pub struct UsageRecorder {
    cache: Arc<dyn KvCache>,
}

impl UsageRecorder {
    pub fn new(cache: Arc<dyn KvCache>) -> Self {
        Self { cache }
    }

    pub async fn record(&self, identity: &str) {
        let date = Utc::now().format("%Y%m%d");
        let key = format!("usage:{identity}:{date}");

        match self.cache.incr(&key).await {
            Ok(1) => {
                if let Err(e) = self.cache.expire(&key, USAGE_TTL).await {
                    debug!(identity, error = %e, "Failed to set usage key expiry");
                }
            }
            Ok(_) => {}
            Err(e) => debug!(identity, error = %e, "Failed to record usage"),
        }
    }
}
