//! Error mapper trait
//!
//! Converts HTTP status codes and provider error bodies into `DriverError`.

use serde_json::Value;

use crate::core::types::DriverError;

/// Trait for mapping provider error responses to `DriverError`
///
/// Implement it per provider when the provider's error body has its own
/// shape; [`GenericErrorMapper`] covers the common `{"error": {"message"}}`
/// and `{"message"}` layouts.
///
/// # Common Mappings
/// * `401`, `403` - Authentication
/// * `404` - NotFound
/// * `400`, `422` - Validation
/// * everything else - Provider
pub trait ErrorMapper: Send + Sync + 'static {
    /// Map HTTP status code and response body
    fn map_http_error(&self, driver: &str, status_code: u16, response_body: &str) -> DriverError {
        let message = serde_json::from_str::<Value>(response_body)
            .ok()
            .and_then(|body| self.extract_message(&body))
            .unwrap_or_else(|| response_body.trim().to_string());

        match status_code {
            401 | 403 => DriverError::authentication(message),
            404 => DriverError::not_found(message),
            400 | 422 => DriverError::validation("request", message),
            _ => DriverError::provider(driver, status_code, message),
        }
    }

    /// Pull a human-readable message out of a JSON error body
    fn extract_message(&self, error_response: &Value) -> Option<String> {
        error_response
            .get("error")
            .and_then(|e| e.get("message").or(Some(e)))
            .or_else(|| error_response.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }
}

/// Mapper for providers without a bespoke error format
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericErrorMapper;

impl ErrorMapper for GenericErrorMapper {}
