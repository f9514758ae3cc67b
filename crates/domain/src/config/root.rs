use serde::{Deserialize, Serialize};

use super::auth::AuthConfig;
use super::cache::CacheConfig;
use super::detection::DetectionConfig;
use super::errors::ConfigError;
use super::limits::LimitsConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration structure for Mailguard
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address, region)
    #[serde(default)]
    pub server: ServerConfig,

    /// Classifier thresholds, TTLs and blocklist source
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Key-value cache backend
    #[serde(default)]
    pub cache: CacheConfig,

    /// API key authentication
    #[serde(default)]
    pub auth: AuthConfig,

    /// Rate limiting and batch bounds
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mailguard.toml in current directory
    /// 3. /etc/mailguard/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("mailguard.toml").exists() {
            Self::from_file("mailguard.toml")?
        } else if std::path::Path::new("/etc/mailguard/config.toml").exists() {
            Self::from_file("/etc/mailguard/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.blocklist_path {
            self.detection.blocklist_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        for (name, value) in [
            ("soft_threshold", self.detection.soft_threshold),
            ("disposable_threshold", self.detection.disposable_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.detection.soft_threshold > self.detection.disposable_threshold {
            return Err(ConfigError::Validation(
                "soft_threshold cannot exceed disposable_threshold".to_string(),
            ));
        }

        if self.limits.max_bulk_batch == 0 {
            return Err(ConfigError::Validation(
                "max_bulk_batch cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub blocklist_path: Option<String>,
    pub log_level: Option<String>,
}
