//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `garden.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use garden_adapter_http_reqwest::DeviceConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Controller connection settings.
    pub device: DeviceConfig,
    /// Status polling settings.
    pub polling: PollingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Status polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Period between two polls, in milliseconds.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `garden.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("garden.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("GARDEN_DEVICE_URL") {
            self.device.base_url = val;
        }
        if let Some(secs) = var("GARDEN_DEVICE_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.device.timeout_secs = secs;
        }
        if let Some(ms) = var("GARDEN_POLL_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.polling.interval_ms = ms;
        }
        if let Some(val) = var("GARDEN_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.device.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation(
                "device base_url must not be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "device base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if self.device.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "device timeout_secs must be non-zero".to_string(),
            ));
        }
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "polling interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Period between two status polls.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.polling.interval_ms)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "garden_console=info,garden_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
