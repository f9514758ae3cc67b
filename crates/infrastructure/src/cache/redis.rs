use async_trait::async_trait;
use mailguard_application::ports::KvCache;
use mailguard_domain::DomainError;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::info;

/// Redis-backed key-value cache.
///
/// `ConnectionManager` multiplexes one connection and reconnects on
/// failure; cloning it per call is the intended usage. All errors are
/// surfaced as `DomainError::CacheError` and handled by the callers'
/// degradation policies (miss for reads, fail-open for the limiter).
pub struct RedisKvCache {
    conn: ConnectionManager,
}

impl RedisKvCache {
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let client = redis::Client::open(url)
            .map_err(|e| DomainError::CacheError(format!("invalid redis url: {e}")))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| DomainError::CacheError(format!("redis connect failed: {e}")))?;

        info!("Connected to Redis cache backend");
        Ok(Self { conn })
    }
}

fn cache_err(e: redis::RedisError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

#[async_trait]
impl KvCache for RedisKvCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(cache_err)
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.set_ex(key, value, ttl.as_secs().max(1))
            .await
            .map_err(cache_err)
    }

    async fn incr(&self, key: &str) -> Result<i64, DomainError> {
        let mut conn = self.conn.clone();
        conn.incr(key, 1i64).await.map_err(cache_err)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.expire(key, ttl.as_secs() as i64)
            .await
            .map_err(cache_err)
    }
}
