//! Mailguard Domain Layer
pub mod config;
pub mod email;
pub mod errors;
pub mod request;
pub mod scoring;
pub mod verdict;

pub use config::{CliOverrides, Config, ConfigError};
pub use email::EmailAddress;
pub use errors::DomainError;
pub use request::CheckRequest;
pub use scoring::{shannon_entropy, SignalSet};
pub use verdict::{BatchMetrics, Classification, Verdict};
