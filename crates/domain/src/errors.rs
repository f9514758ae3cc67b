use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Bulk request contains no emails")]
    EmptyBatch,

    #[error("Bulk request has {got} emails, maximum is {max}")]
    BatchTooLarge { got: usize, max: usize },

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Missing or invalid API key")]
    Unauthorized,

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
