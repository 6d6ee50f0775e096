//! Configuration management for `wxjson`
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::{Result, WxJsonError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WxJsonConfig {
    /// Server role settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Client role settings
    #[serde(default)]
    pub client: ClientConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to, `host:port`
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Largest request body accepted, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Client configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the weather server
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Request timeout in seconds, 0 disables the timeout
    #[serde(default = "default_client_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_client_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_seconds: default_client_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|_| {
            WxJsonError::config(format!(
                "Invalid bind address '{}'. Expected host:port, e.g. 127.0.0.1:8080",
                self.bind_address
            ))
        })
    }
}

impl ClientConfig {
    /// Request timeout, `None` when disabled
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds.into()))
    }
}

impl WxJsonConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let explicit = config_path.is_some();
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("wxjson.toml"))
        });

        if explicit && !config_file.exists() {
            return Err(WxJsonError::config(format!(
                "Config file not found: {}",
                config_file.display()
            )));
        }

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides, e.g. WXJSON_SERVER__BIND_ADDRESS
        builder = builder.add_source(
            Environment::with_prefix("WXJSON")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| WxJsonError::config(format!("Failed to build configuration: {e}")))?;

        let config: WxJsonConfig = settings.try_deserialize().map_err(|e| {
            WxJsonError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wxjson").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_addresses()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_addresses(&self) -> Result<()> {
        self.server.socket_addr()?;

        let url = &self.client.server_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(WxJsonError::config(
                "Server URL must be a valid HTTP or HTTPS URL",
            ));
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.client.timeout_seconds > 300 {
            return Err(WxJsonError::config(
                "Client timeout cannot exceed 300 seconds",
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(WxJsonError::config(
                "Maximum request body size must be greater than zero",
            ));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WxJsonError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WxJsonError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}
