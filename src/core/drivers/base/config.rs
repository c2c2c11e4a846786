//! Driver configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::core::types::{ConfigError, ConfigResult};

/// Credentials and endpoint settings a driver connects with
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// API key or access key id
    pub key: String,

    /// Secret paired with the key, when the provider uses one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Use TLS for the transport
    #[serde(default = "default_secure")]
    pub secure: bool,

    /// API host, without scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// API port; defaults to 443 or 80 depending on `secure`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// User-Agent header sent by HTTP connections
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_secure() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("cloudlb-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl DriverConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: None,
            secure: default_secure(),
            host: None,
            port: None,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = timeout_secs;
        self
    }

    /// Load configuration from `{PREFIX}_KEY`, `{PREFIX}_SECRET`,
    /// `{PREFIX}_SECURE`, `{PREFIX}_HOST`, `{PREFIX}_PORT` and `{PREFIX}_TIMEOUT`
    pub fn from_env(prefix: &str) -> ConfigResult<Self> {
        Self::from_vars(prefix, |name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables read through `lookup`
    pub fn from_vars<F>(prefix: &str, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = prefix.to_uppercase();
        let var = |name: &str| lookup(&format!("{}_{}", prefix, name));

        let key = var("KEY").ok_or_else(|| ConfigError::EnvVarError {
            var: format!("{}_KEY", prefix),
        })?;

        let mut config = Self::new(key);
        config.secret = var("SECRET");
        config.host = var("HOST");

        if let Some(secure) = var("SECURE") {
            config.secure = parse_bool(&secure)
                .ok_or_else(|| ConfigError::invalid_value(format!("{}_SECURE", prefix), secure))?;
        }
        if let Some(port) = var("PORT") {
            config.port = Some(
                port.parse()
                    .map_err(|_| ConfigError::invalid_value(format!("{}_PORT", prefix), port))?,
            );
        }
        if let Some(timeout) = var("TIMEOUT") {
            config.timeout = timeout
                .parse()
                .map_err(|_| ConfigError::invalid_value(format!("{}_TIMEOUT", prefix), timeout))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading driver configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::missing_field("key"));
        }
        if self.timeout == 0 {
            return Err(ConfigError::invalid_value("timeout", "0"));
        }
        if let Some(host) = &self.host {
            if host.trim().is_empty() || host.contains("://") || host.contains('/') {
                return Err(ConfigError::invalid_value("host", host.clone()));
            }
        }
        if self.port == Some(0) {
            return Err(ConfigError::invalid_value("port", "0"));
        }
        Ok(())
    }

    /// URL scheme implied by `secure`
    pub fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// Configured port, or the scheme default
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(if self.secure { 443 } else { 80 })
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl fmt::Debug for DriverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverConfig")
            .field("key", &"[REDACTED]")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secure", &self.secure)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
