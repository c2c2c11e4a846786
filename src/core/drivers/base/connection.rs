//! Key-authenticated HTTP connection
//!
//! Blocking `reqwest` transport for drivers that talk to a REST API.

use reqwest::{Method, StatusCode};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::config::DriverConfig;
use crate::core::traits::{Connection, ErrorMapper, GenericErrorMapper};
use crate::core::types::{ConfigError, DriverError, DriverResult};

/// HTTP transport authenticated with the driver's key and secret
///
/// With a secret the key/secret pair is sent as basic auth; a bare key is sent
/// as a bearer token.
#[derive(Debug)]
pub struct HttpConnection {
    key: String,
    secret: Option<String>,
    base_url: Url,
    timeout: Duration,
    user_agent: String,
    client: Option<Client>,
}

impl HttpConnection {
    /// Scheme, host and port every request path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    pub fn url(&self, path: &str) -> DriverResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| DriverError::validation("path", format!("{}: {}", path, e)))
    }

    /// Start an authenticated request
    ///
    /// # Errors
    /// `DriverError::Connection` if `connect` has not succeeded.
    pub fn request(&self, method: Method, path: &str) -> DriverResult<RequestBuilder> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| DriverError::connection("connection is not established"))?;

        let builder = client.request(method, self.url(path)?);
        Ok(match &self.secret {
            Some(secret) => builder.basic_auth(&self.key, Some(secret)),
            None => builder.bearer_auth(&self.key),
        })
    }

    /// Send a request, mapping non-success responses to `DriverError`
    pub fn execute(&self, driver: &str, request: RequestBuilder) -> DriverResult<Response> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = error_body(driver, status, response.text());
        debug!("{} request failed with status {}", driver, status);
        Err(GenericErrorMapper.map_http_error(driver, status.as_u16(), &body))
    }

    /// Send a request and decode a successful JSON body
    pub fn execute_json<T: DeserializeOwned>(
        &self,
        driver: &str,
        request: RequestBuilder,
    ) -> DriverResult<T> {
        Ok(self.execute(driver, request)?.json()?)
    }
}

/// Body of a failed response, or a description of why it could not be read
fn error_body<E: Display>(driver: &str, status: StatusCode, body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| {
        debug!("{} error body could not be read: {}", driver, e);
        format!("{} (body unreadable: {})", status, e)
    })
}

impl Connection for HttpConnection {
    fn open(config: &DriverConfig) -> DriverResult<Self> {
        let host = config
            .host
            .as_deref()
            .ok_or_else(|| ConfigError::missing_field("host"))?;

        let raw = format!("{}://{}:{}/", config.scheme(), host, config.effective_port());
        let base_url =
            Url::parse(&raw).map_err(|e| ConfigError::invalid_value("host", format!("{}: {}", host, e)))?;

        Ok(Self {
            key: config.key.clone(),
            secret: config.secret.clone(),
            base_url,
            timeout: config.timeout_duration(),
            user_agent: config.user_agent.clone(),
            client: None,
        })
    }

    fn connect(&mut self) -> DriverResult<()> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| DriverError::connection_with_source("failed to build HTTP client", Box::new(e)))?;

        debug!("HTTP connection ready for {}", self.base_url);
        self.client = Some(client);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.client.is_some()
    }
}
