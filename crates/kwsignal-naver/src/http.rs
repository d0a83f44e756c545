//! Shared request plumbing for both Naver clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::NaverError;

pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, NaverError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base_url` and normalises it to end with exactly one slash, so that
/// joining a relative path appends rather than replacing the last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, NaverError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| NaverError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Joins an absolute API path (e.g. `/keywordstool`) onto the base URL and
/// appends the query pairs.
pub(crate) fn endpoint_url(
    base_url: &Url,
    path: &str,
    query: &[(&str, &str)],
) -> Result<Url, NaverError> {
    let mut url = base_url
        .join(path.trim_start_matches('/'))
        .map_err(|e| NaverError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in query {
            pairs.append_pair(k, v);
        }
    }
    Ok(url)
}

/// Sends the request, requires a 2xx status, and decodes the body as `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &Url,
    context: &str,
) -> Result<T, NaverError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(NaverError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| NaverError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}
