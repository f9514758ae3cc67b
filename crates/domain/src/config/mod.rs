mod auth;
mod cache;
mod detection;
mod errors;
mod limits;
mod logging;
mod root;
mod server;

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use detection::DetectionConfig;
pub use errors::ConfigError;
pub use limits::LimitsConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
