//! Reqwest-based HTTP client for the video-on-demand API.

use std::sync::Arc;

use reqwest::Client;
use url::Url;
use vodnode_engine::ApiService;

use super::ReqwestConfig;
use crate::error::{Error, Result};

/// Tracing target for reqwest client operations.
pub const TRACING_TARGET: &str = "vodnode_reqwest::client";

/// Inner client that holds the HTTP client and configuration.
struct ReqwestClientInner {
    http: Client,
    base_url: Url,
    config: ReqwestConfig,
}

/// Reqwest-based client for the video-on-demand API.
///
/// This client implements the [`ApiProvider`](vodnode_engine::ApiProvider)
/// trait: endpoints are resolved against the configured base URL and every
/// call carries the bearer token, when one is set.
///
/// # Examples
///
/// ```rust,ignore
/// use vodnode_engine::{ApiRequest, catalog::HttpMethod};
/// use vodnode_reqwest::{ReqwestClient, ReqwestConfig};
///
/// let client = ReqwestClient::new(ReqwestConfig::new("https://api.example.com/v1"))?;
/// let request = ApiRequest::new(HttpMethod::Get, "/channels");
/// let response = client.into_service().send(&request).await?;
/// ```
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<ReqwestClientInner>,
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestClient {
    /// Creates a new reqwest client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute HTTP(S) URL or the
    /// HTTP client cannot be created.
    pub fn new(config: ReqwestConfig) -> Result<Self> {
        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            api_url = %config.api_url,
            timeout_ms = timeout.as_millis(),
            has_token = config.api_token.is_some(),
            "Creating reqwest client"
        );

        let base_url = Url::parse(&config.api_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedScheme(base_url.scheme().to_owned()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()?;

        let inner = ReqwestClientInner {
            http,
            base_url,
            config,
        };
        let client = Self {
            inner: Arc::new(inner),
        };

        tracing::info!(
            target: TRACING_TARGET,
            api_url = %client.inner.base_url,
            "Reqwest client created successfully"
        );

        Ok(client)
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ReqwestConfig {
        &self.inner.config
    }

    /// Resolves an engine endpoint against the base URL.
    ///
    /// The endpoint is appended to the base path, so a base of
    /// `https://host/v1/` and an endpoint of `/media` give `https://host/v1/media`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        if endpoint.is_empty() || endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        }
    }

    /// Converts this client into an [`ApiService`] for use with the dispatcher.
    pub fn into_service(self) -> ApiService {
        ApiService::new(self)
    }
}
