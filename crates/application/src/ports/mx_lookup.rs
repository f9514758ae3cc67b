use async_trait::async_trait;
use mailguard_domain::DomainError;

/// Live MX record lookup.
///
/// Adapters encode every negative DNS outcome (NXDOMAIN, no answer,
/// timeout, resolver failure) as `Ok(false)`: MX absence is a heuristic
/// signal, not an error the caller can act on.
#[async_trait]
pub trait MxLookup: Send + Sync {
    async fn has_mx(&self, domain: &str) -> Result<bool, DomainError>;
}
