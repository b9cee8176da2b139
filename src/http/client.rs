//! Linode API client and request dispatcher
//!
//! Provides the HTTP client that every resource accessor goes through:
//! - Base URL, API version and bearer token handling
//! - A single dispatch path for GET/POST/PUT/DELETE
//! - Error envelope decoding for non-success statuses
//! - Cancellation through a shared `CancellationToken`

use crate::error::{Error, Result};
use crate::types::{Method, StringMap};
use bytes::Bytes;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::RequestBuilder;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.linode.com";

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v4";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "LINODE_TOKEN";

/// Environment variable overriding the API host
pub const URL_ENV: &str = "LINODE_URL";

/// Environment variable overriding the API version
pub const API_VERSION_ENV: &str = "LINODE_API_VERSION";

/// Configuration for the API client
#[derive(Clone)]
pub struct ClientConfig {
    /// API host, e.g. `https://api.linode.com`
    pub base_url: String,
    /// Version segment appended to the host, e.g. `v4`
    pub api_version: String,
    /// Personal access token sent as a bearer token
    pub token: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("linode-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load the token, host and API version from `LINODE_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                config.token = Some(token);
            }
        }
        if let Ok(url) = std::env::var(URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(version) = std::env::var(API_VERSION_ENV) {
            if !version.is_empty() {
                config.api_version = version;
            }
        }
        config
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API host
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API version segment (empty to disable)
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set the bearer token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Adjusts an outgoing request before it is sent (query parameters, filter headers)
pub trait RequestMutator: Send + Sync {
    /// Apply this mutator to the request
    fn mutate(&self, request: RequestBuilder) -> RequestBuilder;
}

impl<F> RequestMutator for F
where
    F: Fn(RequestBuilder) -> RequestBuilder + Send + Sync,
{
    fn mutate(&self, request: RequestBuilder) -> RequestBuilder {
        self(request)
    }
}

/// Per-call request parameters
#[derive(Default)]
pub struct RequestParams<'a> {
    /// Already-encoded JSON body
    pub body: Option<Bytes>,
    /// Optional query/filter mutator
    pub mutator: Option<&'a dyn RequestMutator>,
}

impl<'a> RequestParams<'a> {
    /// Create empty request parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON body
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request mutator
    #[must_use]
    pub fn mutator(mut self, mutator: &'a dyn RequestMutator) -> Self {
        self.mutator = Some(mutator);
        self
    }
}

impl std::fmt::Debug for RequestParams<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestParams")
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .field("has_mutator", &self.mutator.is_some())
            .finish()
    }
}

/// Linode API client
///
/// Cloning is cheap: clones share the connection pool and configuration.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    cancel: CancellationToken,
}

impl Client {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client configured from `LINODE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_http_client(http, config))
    }

    /// Create a client around an existing transport
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
            cancel: CancellationToken::new(),
        }
    }

    /// Return a client whose requests abort once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            http: self.http.clone(),
            config: Arc::clone(&self.config),
            cancel: token,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one request and return the raw response body.
    ///
    /// Non-success statuses are decoded into [`Error::Api`].
    pub async fn do_request(
        &self,
        method: Method,
        path: &str,
        params: RequestParams<'_>,
    ) -> Result<Bytes> {
        let url = self.build_url(path)?;

        let mut req = self
            .http
            .request(method.into(), url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref token) = self.config.token {
            req = req.bearer_auth(token);
        }

        if let Some(body) = params.body {
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        if let Some(mutator) = params.mutator {
            req = mutator.mutate(req);
        }

        debug!("Dispatching request: {} {}", method, url);

        let exchange = async {
            let response = req.send().await.map_err(|e| self.transport_error(e))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| self.transport_error(e))?;
            Ok::<_, Error>((status, body))
        };

        let (status, body) = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!("Request cancelled: {} {}", method, url);
                return Err(Error::Cancelled);
            }
            result = exchange => result?,
        };

        if !status.is_success() {
            let err = Error::from_response_body(status, &body);
            warn!("Request failed: {} {} -> {}", method, url, err);
            return Err(err);
        }

        Ok(body)
    }

    /// Build the full URL for an API path.
    ///
    /// URL parsing resolves `.` and `..` segments, so a path whose segments
    /// do not survive parsing unchanged is rejected with [`Error::InvalidPath`].
    pub fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        let base = self.config.base_url.trim_end_matches('/');
        let version = self.config.api_version.trim_matches('/');
        let path = path.trim_start_matches('/');

        let full = if version.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{version}/{path}")
        };

        let url = Url::parse(&full)?;
        let composed = path.split(['?', '#']).next().unwrap_or_default();
        if !url.path().ends_with(composed) {
            return Err(Error::InvalidPath {
                path: path.to_string(),
            });
        }

        Ok(url)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(err)
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}
