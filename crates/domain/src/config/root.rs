use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::web::WebUiConfig;

/// Main configuration structure for Zonelight
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Bind address shared by the DNS and web listeners
    #[serde(default)]
    pub server: ServerConfig,

    /// DNS port, TTL and record tables
    #[serde(default)]
    pub dns: DnsConfig,

    /// Read-only status page
    #[serde(default)]
    pub web_ui: WebUiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonelight.toml in current directory
    /// 3. /etc/zonelight/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.dns.port = port;
        }
        if let Some(port) = overrides.web_port {
            self.web_ui.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Record addresses are deliberately left unchecked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.web_ui.enabled && self.web_ui.port == 0 {
            return Err(ConfigError::Validation(
                "Web UI port cannot be 0 when the web UI is enabled".to_string(),
            ));
        }

        if self.server.bind_address.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address '{}'",
                self.server.bind_address
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("zonelight.toml").exists() {
            Some("zonelight.toml".to_string())
        } else if std::path::Path::new("/etc/zonelight/config.toml").exists() {
            Some("/etc/zonelight/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
