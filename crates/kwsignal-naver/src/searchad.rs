//! HTTP client for the search-advertising keyword tool.

use reqwest::{Client, Url};

use crate::error::NaverError;
use crate::http::{build_client, endpoint_url, parse_base_url, send_json};
use crate::signature::signed_headers;
use crate::types::KeywordToolResponse;

const DEFAULT_BASE_URL: &str = "https://api.naver.com";

/// Path of the keyword tool endpoint; also the path that gets signed.
pub const KEYWORDS_TOOL_PATH: &str = "/keywordstool";

/// API key, HMAC secret, and customer id for the search-advertising API.
#[derive(Clone)]
pub struct SearchAdCredentials {
    pub api_key: String,
    pub secret_key: String,
    pub customer_id: String,
}

impl SearchAdCredentials {
    #[must_use]
    pub fn new(api_key: &str, secret_key: &str, customer_id: &str) -> Self {
        Self {
            api_key: api_key.to_owned(),
            secret_key: secret_key.to_owned(),
            customer_id: customer_id.to_owned(),
        }
    }
}

impl std::fmt::Debug for SearchAdCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAdCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[redacted]")
            .field("customer_id", &self.customer_id)
            .finish()
    }
}

/// Client for the keyword suggestion endpoint.
///
/// Use [`SearchAdClient::new`] for production or
/// [`SearchAdClient::with_base_url`] to point at a mock server in tests.
pub struct SearchAdClient {
    client: Client,
    credentials: SearchAdCredentials,
    base_url: Url,
}

impl SearchAdClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        credentials: SearchAdCredentials,
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
        credentials: SearchAdCredentials,
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

    /// Fetches related keywords with PC/mobile monthly volume detail.
    ///
    /// `hint` is sent as-is; callers strip whitespace beforehand because the
    /// endpoint rejects hint keywords containing spaces.
    ///
    /// # Errors
    ///
    /// - [`NaverError::Http`] on network failure.
    /// - [`NaverError::UnexpectedStatus`] on a non-2xx response.
    /// - [`NaverError::Deserialize`] if the body does not match
    ///   [`KeywordToolResponse`].
    pub async fn keyword_ideas(&self, hint: &str) -> Result<KeywordToolResponse, NaverError> {
        let url = endpoint_url(
            &self.base_url,
            KEYWORDS_TOOL_PATH,
            &[("hintKeywords", hint), ("showDetail", "1")],
        )?;
        let signed = signed_headers("GET", KEYWORDS_TOOL_PATH, &self.credentials);

        let mut request = self.client.get(url.clone());
        for (name, value) in signed.pairs() {
            request = request.header(name, value);
        }

        tracing::debug!(hint, "requesting keyword ideas");
        let response: KeywordToolResponse =
            send_json(request, &url, &format!("keywordstool(hint={hint})")).await?;
        tracing::debug!(
            hint,
            count = response.keyword_list.as_ref().map_or(0, Vec::len),
            "received keyword ideas"
        );
        Ok(response)
    }
}
