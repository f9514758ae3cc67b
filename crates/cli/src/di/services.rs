use mailguard_api::AppState;
use mailguard_application::ports::KvCache;
use mailguard_application::services::{
    BlocklistStore, CachedMxResolver, KeywordMatcher, RateLimiter, UsageRecorder,
};
use mailguard_application::use_cases::{CheckBulkUseCase, CheckEmailUseCase};
use mailguard_domain::Config;
use mailguard_infrastructure::{
    FileBlocklistSource, HickoryMxLookup, MemoryKvCache, RedisKvCache, TracingErrorSink,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Wired dependency graph: cache backend, adapters, domain services and
/// use cases, built once at startup.
pub struct Services {
    pub blocklist: Arc<BlocklistStore>,
    pub check_email: Arc<CheckEmailUseCase>,
    pub check_bulk: Arc<CheckBulkUseCase>,
    pub rate_limiter: Arc<RateLimiter>,
    pub usage: Arc<UsageRecorder>,
}

impl Services {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let cache = build_cache(config).await?;
        let error_sink = Arc::new(TracingErrorSink);

        let blocklist_source = Arc::new(FileBlocklistSource::new(
            config.detection.blocklist_path.clone(),
        ));
        let blocklist = Arc::new(
            BlocklistStore::new(blocklist_source).with_error_sink(error_sink.clone()),
        );
        blocklist.load().await;
        info!(domains = blocklist.len(), "Blocklist ready");

        let mx_lookup = Arc::new(HickoryMxLookup::new(Duration::from_millis(
            config.detection.mx_timeout_ms,
        )));
        let mx = Arc::new(CachedMxResolver::new(
            mx_lookup,
            cache.clone(),
            Duration::from_secs(config.detection.mx_cache_ttl_seconds),
        ));

        let check_email = Arc::new(CheckEmailUseCase::new(
            blocklist.clone(),
            mx,
            Arc::new(KeywordMatcher::new()),
            config.detection.soft_threshold,
            config.detection.disposable_threshold,
            config.detection.result_ttl_seconds,
            config.detection.version.clone(),
        ));
        let check_bulk = Arc::new(CheckBulkUseCase::new(
            check_email.clone(),
            config.limits.max_bulk_batch,
        ));

        let rate_limiter = Arc::new(
            RateLimiter::new(cache.clone(), config.limits.rate_limit_per_second)
                .with_error_sink(error_sink),
        );
        let usage = Arc::new(UsageRecorder::new(cache));

        Ok(Self {
            blocklist,
            check_email,
            check_bulk,
            rate_limiter,
            usage,
        })
    }

    pub fn into_app_state(self, config: &Config) -> AppState {
        AppState {
            check_email: self.check_email,
            check_bulk: self.check_bulk,
            rate_limiter: self.rate_limiter,
            usage: self.usage,
            api_keys: Arc::new(config.auth.api_keys.clone()),
            region: config.server.region.clone(),
        }
    }
}

async fn build_cache(config: &Config) -> anyhow::Result<Arc<dyn KvCache>> {
    match &config.cache.redis_url {
        Some(url) => {
            let cache = RedisKvCache::connect(url).await?;
            Ok(Arc::new(cache))
        }
        None => {
            info!("No redis_url configured, using in-process cache");
            Ok(Arc::new(MemoryKvCache::new()))
        }
    }
}
