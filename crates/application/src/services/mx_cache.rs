use crate::ports::{KvCache, MxLookup};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const MX_KEY_PREFIX: &str = "mx:";

/// MX presence lookup memoized through the key-value cache.
///
/// Entry format: key `mx:{domain}`, value `"1"` or `"0"`, expiring after
/// the configured TTL. Both outcomes are cached so unstable or
/// nonexistent domains do not trigger a live query per request.
/// Concurrent first lookups for the same domain are not de-duplicated;
/// both compute the same value and the last cache write wins.
pub struct CachedMxResolver {
    lookup: Arc<dyn MxLookup>,
    cache: Arc<dyn KvCache>,
    ttl: Duration,
}

impl CachedMxResolver {
    pub fn new(lookup: Arc<dyn MxLookup>, cache: Arc<dyn KvCache>, ttl: Duration) -> Self {
        Self { lookup, cache, ttl }
    }

    /// Whether `domain` has at least one resolvable MX record.
    ///
    /// Cache read errors degrade to a miss and cache write errors are
    /// logged; neither surfaces to the caller.
    pub async fn has_mx(&self, domain: &str) -> bool {
        let key = format!("{MX_KEY_PREFIX}{domain}");

        match self.cache.get(&key).await {
            Ok(Some(value)) => {
                debug!(domain, cached = %value, "MX cache hit");
                return value == "1";
            }
            Ok(None) => {}
            Err(e) => {
                warn!(domain, error = %e, "MX cache read failed, treating as miss");
            }
        }

        let has_records = self.lookup.has_mx(domain).await.unwrap_or(false);
        debug!(domain, has_records, "MX live lookup");

        let value = if has_records { "1" } else { "0" };
        if let Err(e) = self.cache.set_with_ttl(&key, value, self.ttl).await {
            warn!(domain, error = %e, "MX cache write failed");
        }

        has_records
    }
}
