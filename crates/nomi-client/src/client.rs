//! Main client implementation.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::api::{NomisApi, RoomsApi};
use crate::error::{Error, Result};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.nomi.ai/v1";

/// Nomi.ai API client.
///
/// Every request carries the bearer token supplied at build time. Only a
/// `200 OK` counts as success; nothing is retried, and no timeout is set
/// beyond reqwest's defaults.
///
/// # Example
///
/// ```no_run
/// use nomi_client::NomiClient;
///
/// # async fn example() -> nomi_client::Result<()> {
/// let client = NomiClient::builder()
///     .base_url("https://api.nomi.ai/v1")
///     .api_key("secret")
///     .build()?;
///
/// let nomis = client.nomis().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NomiClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests, always ending in `/`.
    pub(crate) base_url: Url,
}

impl NomiClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the Nomis API.
    pub fn nomis(&self) -> NomisApi {
        NomisApi::new(self.clone())
    }

    /// Access the rooms API.
    pub fn rooms(&self) -> RoomsApi {
        RoomsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        tracing::debug!(method = "GET", %url, "sending request");

        let response = self.inner.http.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(method = "POST", %url, "sending request");

        let body = serde_json::to_vec(body)
            .map_err(|e| Error::Request(format!("error encoding request body: {}", e)))?;
        let response = self.inner.http.post(url).body(body).send().await?;
        Self::handle_response(response).await
    }

    /// Check the status, then decode the body.
    ///
    /// The body of a non-200 response is never read.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "received response");

        if status != StatusCode::OK {
            return Err(Error::Status { status });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Builder for creating a NomiClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
        }
    }

    /// Set the base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<NomiClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::Request("api_key is required".to_string()))?;

        // Parse and normalize base URL so relative joins keep any path prefix
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| Error::Request("invalid API key".to_string()))?;
        headers.insert(AUTHORIZATION, value);

        let user_agent = format!("nomi-client/{}", env!("CARGO_PKG_VERSION"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        Ok(NomiClient {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
