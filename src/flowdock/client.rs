//! Flowdock HTTP client for API interactions

use log::debug;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

use crate::config::api;
use crate::error::{FlowdockError, Result};

/// Callback receiving debug diagnostic lines (one per request)
pub type DebugSink = Box<dyn Fn(&str) + Send + Sync>;

/// Connection settings for a Flowdock session
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API base URL without trailing slash
    pub base_url: String,
    /// Total request timeout
    pub timeout: Duration,
    /// Emit a diagnostic line for every request
    pub debug: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }
}

/// Flowdock API client
///
/// Holds one HTTP session for the whole CLI invocation. Flowdock authenticates
/// with HTTP Basic auth where the API key is the username and the password is
/// left empty.
pub struct FlowdockClient {
    /// `None` once the session has been closed
    client: Option<Client>,
    api_key: String,
    base_url: String,
    debug: bool,
    debug_sink: DebugSink,
}

impl fmt::Debug for FlowdockClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowdockClient")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl FlowdockClient {
    /// Create a client for the public Flowdock API with default settings
    pub fn new(api_key: String) -> Result<Self> {
        Self::from_settings(api_key, &ClientSettings::default())
    }

    /// Create a client with explicit connection settings
    pub fn from_settings(api_key: String, settings: &ClientSettings) -> Result<Self> {
        if !settings.base_url.starts_with("http://") && !settings.base_url.starts_with("https://")
        {
            return Err(FlowdockError::Config(format!(
                "API URL '{}' must start with http:// or https://",
                settings.base_url
            )));
        }
        if settings.timeout.is_zero() {
            return Err(FlowdockError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client: Some(client),
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            debug: settings.debug,
            debug_sink: Box::new(|line| eprintln!("{}", line)),
        })
    }

    /// Enable or disable per-request diagnostic lines
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Check if debug mode is enabled
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Replace the sink debug lines are written to (stderr by default)
    pub fn set_debug_sink<F>(&mut self, sink: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.debug_sink = Box::new(sink);
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Release the connection pool. Safe to call more than once.
    pub fn close(&mut self) {
        if self.client.take().is_some() {
            debug!("Closed Flowdock session");
        }
    }

    /// Check whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    fn http(&self) -> Result<&Client> {
        self.client.as_ref().ok_or(FlowdockError::SessionClosed)
    }

    fn trace_request(&self, method: &str, url: &str) {
        debug!("{} {}", method, url);
        if self.debug {
            (self.debug_sink)(&format!("Sending {} request to URL {}", method, url));
        }
    }

    /// Add authentication and standard headers to a request builder
    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .basic_auth(&self.api_key, None::<&str>)
            .header("Accept", "application/json")
    }

    /// Create an authenticated GET request builder
    pub(crate) fn get(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        let client = self.http()?;
        self.trace_request("GET", url);
        Ok(self.with_auth(client.get(url)))
    }

    /// Create an authenticated DELETE request builder
    pub(crate) fn delete(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        let client = self.http()?;
        self.trace_request("DELETE", url);
        Ok(self.with_auth(client.delete(url)))
    }

    /// Return an error for non-success status codes
    pub(crate) fn check_status(response: &reqwest::Response, error_context: &str) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(FlowdockError::Api {
                status: status.as_u16(),
                message: format!("Failed to {}", error_context),
            });
        }
        Ok(())
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        Self::check_status(&response, error_context)?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
impl FlowdockClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        let settings = ClientSettings {
            base_url: base_url.to_string(),
            ..ClientSettings::default()
        };
        Self::from_settings("test-key".to_string(), &settings)
            .expect("mock server URL should be valid")
    }
}
