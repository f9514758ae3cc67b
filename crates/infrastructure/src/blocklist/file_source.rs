use async_trait::async_trait;
use mailguard_application::ports::BlocklistSource;
use mailguard_domain::DomainError;
use std::path::PathBuf;

/// Newline-delimited blocklist file on local disk.
pub struct FileBlocklistSource {
    path: PathBuf,
}

impl FileBlocklistSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BlocklistSource for FileBlocklistSource {
    async fn read(&self) -> Result<String, DomainError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {e}", self.path.display())))
    }
}
