use async_trait::async_trait;
use mailguard_domain::DomainError;

/// Line-oriented text source for the domain blocklist.
#[async_trait]
pub trait BlocklistSource: Send + Sync {
    async fn read(&self) -> Result<String, DomainError>;
}
