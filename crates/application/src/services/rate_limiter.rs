use crate::ports::{ErrorSink, KvCache, NullErrorSink};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const RATE_KEY_PREFIX: &str = "rate:";
const WINDOW: Duration = Duration::from_secs(1);

/// Identity used when no API keys are configured.
pub const ANONYMOUS_IDENTITY: &str = "anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited,
}

/// Fixed one-second window counter per identity key.
///
/// The counter is incremented atomically; the increment that creates the
/// key also sets its expiry. A crash between the two steps only stretches
/// the window, it never unbounds admission. Rejected requests keep their
/// increment, matching fixed-window semantics.
pub struct RateLimiter {
    cache: Arc<dyn KvCache>,
    limit: i64,
    error_sink: Arc<dyn ErrorSink>,
}

impl RateLimiter {
    pub fn new(cache: Arc<dyn KvCache>, limit: i64) -> Self {
        Self {
            cache,
            limit,
            error_sink: Arc::new(NullErrorSink),
        }
    }

    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = sink;
        self
    }

    pub async fn check(&self, identity: &str) -> RateDecision {
        if self.limit <= 0 {
            return RateDecision::Allowed;
        }

        let key = format!("{RATE_KEY_PREFIX}{identity}");
        let count = match self.cache.incr(&key).await {
            Ok(count) => count,
            Err(e) => {
                // Fail open: an unreachable cache should not take the
                // whole API down with it.
                warn!(identity, error = %e, "Rate limit counter unavailable, admitting request");
                self.error_sink.capture("rate_limit", &e);
                return RateDecision::Allowed;
            }
        };

        if count == 1 {
            if let Err(e) = self.cache.expire(&key, WINDOW).await {
                warn!(identity, error = %e, "Failed to set rate window expiry");
            }
        }

        if count > self.limit {
            RateDecision::Limited
        } else {
            RateDecision::Allowed
        }
    }
}
