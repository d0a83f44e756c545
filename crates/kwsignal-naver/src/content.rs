//! HTTP client for the open search API (blog and cafe article search).

use reqwest::{Client, Url};

use crate::error::NaverError;
use crate::http::{build_client, endpoint_url, parse_base_url, send_json};
use crate::types::{BlogSearchResponse, CafeSearchResponse};

const DEFAULT_BASE_URL: &str = "https://openapi.naver.com";
const BLOG_SEARCH_PATH: &str = "/v1/search/blog.json";
const CAFE_SEARCH_PATH: &str = "/v1/search/cafearticle.json";

/// Client id/secret pair for the open search API.
#[derive(Clone)]
pub struct OpenApiCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl OpenApiCredentials {
    #[must_use]
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
        }
    }
}

impl std::fmt::Debug for OpenApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenApiCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

/// Client for the blog (primary) and cafe article (secondary) search
/// endpoints.
pub struct ContentSearchClient {
    client: Client,
    credentials: OpenApiCredentials,
    base_url: Url,
}

impl ContentSearchClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        credentials: OpenApiCredentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, NaverError> {
        Self::with_base_url(credentials, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`NaverError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        credentials: OpenApiCredentials,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NaverError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            credentials,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Searches blog posts, returning the total hit count and up to
    /// `display` items (the API caps this at 100).
    ///
    /// # Errors
    ///
    /// - [`NaverError::Http`] on network failure.
    /// - [`NaverError::UnexpectedStatus`] on a non-2xx response.
    /// - [`NaverError::Deserialize`] if the body is not the expected shape.
    pub async fn search_blog(
        &self,
        query: &str,
        display: u32,
    ) -> Result<BlogSearchResponse, NaverError> {
        let response: BlogSearchResponse = self
            .search(BLOG_SEARCH_PATH, query, display, "blog")
            .await?;
        tracing::debug!(
            query,
            total = response.total,
            items = response.items.len(),
            "blog search complete"
        );
        Ok(response)
    }

    /// Searches cafe articles. Callers usually pass `display = 1` and read
    /// only [`CafeSearchResponse::total`].
    ///
    /// # Errors
    ///
    /// - [`NaverError::Http`] on network failure.
    /// - [`NaverError::UnexpectedStatus`] on a non-2xx response.
    /// - [`NaverError::Deserialize`] if the body is not the expected shape.
    pub async fn search_cafe(
        &self,
        query: &str,
        display: u32,
    ) -> Result<CafeSearchResponse, NaverError> {
        let response: CafeSearchResponse = self
            .search(CAFE_SEARCH_PATH, query, display, "cafearticle")
            .await?;
        tracing::debug!(query, total = response.total, "cafe search complete");
        Ok(response)
    }

    async fn search<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        display: u32,
        kind: &str,
    ) -> Result<T, NaverError> {
        let display = display.to_string();
        let url = endpoint_url(
            &self.base_url,
            path,
            &[("query", query), ("display", &display)],
        )?;
        let request = self
            .client
            .get(url.clone())
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret);
        send_json(request, &url, &format!("{kind}(query={query})")).await
    }
}
