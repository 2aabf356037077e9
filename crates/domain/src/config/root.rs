use serde::{Deserialize, Serialize};
use std::path::Path;

use super::api::ApiConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::store::StoreConfig;

const LOCAL_CONFIG_PATH: &str = "recordbook.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/recordbook/config.toml";

/// Main configuration structure for Recordbook
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, ports, concurrency bound)
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store location and persistence behaviour
    #[serde(default)]
    pub store: StoreConfig,

    /// Administrative HTTP API
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. recordbook.toml in current directory
    /// 3. /etc/recordbook/config.toml
    /// 4. Default configuration
    ///
    /// Command-line (and environment) overrides are applied last.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides)?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(addr) = overrides.dns_addr {
            let (host, port) = split_host_port(&addr)?;
            self.server.bind_address = host;
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(dir) = overrides.data_dir {
            self.store.data_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(limit) = overrides.max_concurrent_queries {
            self.server.max_concurrent_queries = Some(limit);
        }
        if overrides.enable_api {
            self.api.enabled = true;
        }
        if let Some(key) = overrides.api_key {
            self.api.api_key = Some(key);
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.api.enabled && self.server.web_port == 0 {
            return Err(ConfigError::Validation(
                "Web port cannot be 0 when the API is enabled".to_string(),
            ));
        }

        if self.store.data_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Store data_dir cannot be empty".to_string(),
            ));
        }

        if self.server.max_concurrent_queries == Some(0) {
            return Err(ConfigError::Validation(
                "max_concurrent_queries must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Splits `host:port`, `[v6]:port` or `:port` (any address).
fn split_host_port(addr: &str) -> Result<(String, u16), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidOverride {
        field: "dns_addr",
        reason: format!("'{}': {}", addr, reason),
    };

    let (host, port) = addr.rsplit_once(':').ok_or_else(|| invalid("missing port"))?;
    let port = port.parse::<u16>().map_err(|_| invalid("bad port"))?;
    let host = host.trim_start_matches('[').trim_end_matches(']');
    let host = if host.is_empty() { "0.0.0.0" } else { host };

    Ok((host.to_string(), port))
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    /// Full listen address, e.g. `127.0.0.1:5353` or `:53`
    pub dns_addr: Option<String>,
    pub bind_address: Option<String>,
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub data_dir: Option<String>,
    pub log_level: Option<String>,
    pub max_concurrent_queries: Option<usize>,
    pub enable_api: bool,
    pub api_key: Option<String>,
}
