//! Configuration management for the check-in service.

use serde::{Deserialize, Serialize};

use crate::error::{CheckinError, CheckinResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{CHECKIN_ENV}.toml (environment-specific)
    /// 3. Environment variables with CHECKIN_ prefix
    pub fn load() -> CheckinResult<Self> {
        let env = std::env::var("CHECKIN_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("CHECKIN").separator("__"));

        let config: Config = builder
            .build()
            .map_err(|e| CheckinError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CheckinError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CheckinResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckinError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CheckinError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> CheckinResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

/// Server transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Transport mode: "stdio" or "tcp"
    pub transport: String,
    /// Bind address for the TCP transport
    pub bind_address: String,
    /// TCP port for the TCP transport
    pub tcp_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".to_string(),
            bind_address: "127.0.0.1".to_string(),
            tcp_port: 3900,
        }
    }
}

impl ServerConfig {
    fn validate(&self) -> CheckinResult<()> {
        match self.transport.as_str() {
            "stdio" | "tcp" => Ok(()),
            other => Err(CheckinError::Config(format!(
                "Invalid transport '{}': expected 'stdio' or 'tcp'",
                other
            ))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Backend name; "memory" is the only supported backend
    pub backend: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
        }
    }
}

impl StorageConfig {
    fn validate(&self) -> CheckinResult<()> {
        if self.backend != "memory" {
            return Err(CheckinError::Config(format!(
                "Unknown storage backend '{}'",
                self.backend
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.transport, "stdio");
        assert_eq!(config.storage.backend, "memory");
    }

    #[test]
    fn test_invalid_transport_rejected() {
        let config = Config {
            server: ServerConfig {
                transport: "http".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_from_toml() {
        let toml = r#"
            [server]
            transport = "tcp"
            bind_address = "0.0.0.0"
            tcp_port = 4000

            [logging]
            level = "debug"

            [storage]
            backend = "memory"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.tcp_port, 4000);
        assert_eq!(config.logging.level, "debug");
    }
}
