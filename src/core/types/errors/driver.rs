//! Load balancer driver error types

use super::config::ConfigError;

/// Which side of an algorithm translation table missed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKind {
    /// A provider-native value had no portable algorithm
    Value,
    /// A portable algorithm had no provider-native value
    Algorithm,
}

impl std::fmt::Display for InvalidKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value => f.write_str("value"),
            Self::Algorithm => f.write_str("algorithm"),
        }
    }
}

/// Error type shared by every load balancer driver
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The driver does not provide this operation
    #[error("{operation} not implemented for this driver ({driver})")]
    NotImplemented {
        operation: &'static str,
        driver: String,
    },

    /// Algorithm translation lookup miss
    #[error("Invalid {kind}: {value} (driver: {driver})")]
    InvalidValue {
        kind: InvalidKind,
        value: String,
        driver: String,
    },

    /// Transport could not be established or is not usable
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Provider rejected the credentials
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Balancer or member does not exist
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Request failed local or provider-side validation
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    /// Provider returned an error response
    #[error("Provider error ({driver}, status {status}): {message}")]
    Provider {
        driver: String,
        status: u16,
        message: String,
    },

    /// HTTP transport failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Driver configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl DriverError {
    pub fn not_implemented(operation: &'static str, driver: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation,
            driver: driver.into(),
        }
    }

    /// Native value missing from a driver's value-to-algorithm table
    pub fn invalid_value(value: impl std::fmt::Display, driver: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind: InvalidKind::Value,
            value: value.to_string(),
            driver: driver.into(),
        }
    }

    /// Algorithm missing from a driver's algorithm-to-value table
    pub fn invalid_algorithm(algorithm: impl std::fmt::Display, driver: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind: InvalidKind::Algorithm,
            value: algorithm.to_string(),
            driver: driver.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn connection_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn provider(driver: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            driver: driver.into(),
            status,
            message: message.into(),
        }
    }
}

/// Classification helpers
impl DriverError {
    /// Get the error type as a string identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NotImplemented { .. } => "not_implemented",
            Self::InvalidValue { .. } => "invalid_value",
            Self::Connection { .. } => "connection",
            Self::Authentication(_) => "authentication",
            Self::NotFound { .. } => "not_found",
            Self::Validation { .. } => "validation",
            Self::Provider { .. } => "provider",
            Self::Transport(_) => "transport",
            Self::Configuration(_) => "configuration",
        }
    }

    /// Capability-missing signal, not a runtime condition
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Whether a caller could reasonably try the call again.
    ///
    /// Drivers never retry on their own; this only classifies.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection { .. } | Self::Transport(_) => true,
            Self::Provider { status, .. } => matches!(status, 429 | 500..=599),
            _ => false,
        }
    }
}

/// Result type alias
pub type DriverResult<T> = Result<T, DriverError>;
