use async_trait::async_trait;
use mailguard_domain::DomainError;
use std::time::Duration;

/// Key-value cache with per-key TTL.
///
/// Backends must guarantee single-key atomicity for `incr`; no multi-key
/// transactions are required anywhere in the system.
#[async_trait]
pub trait KvCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration)
        -> Result<(), DomainError>;

    /// Atomically increment the integer at `key`, creating it at 1.
    async fn incr(&self, key: &str) -> Result<i64, DomainError>;

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), DomainError>;
}
