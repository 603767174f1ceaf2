use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Root configuration. Loaded once at startup; the record store is then
/// seeded from `dns.local_records` and `dns.ptr_overrides`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.local_ttl == 0 {
            return Err(ConfigError::Validation(
                "local_ttl cannot be 0".to_string(),
            ));
        }
        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }
        for record in &self.dns.local_records {
            if record.hostname.is_empty() {
                return Err(ConfigError::Validation(
                    "local_records entry with empty hostname".to_string(),
                ));
            }
        }
        Ok(())
    }
}
