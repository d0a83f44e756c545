//! Request signing for the search-advertising API.
//!
//! Every call carries a millisecond timestamp and an HMAC-SHA256 signature
//! over `"{timestamp}.{method}.{path}"`, keyed by the account's secret and
//! base64-encoded.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::searchad::SearchAdCredentials;

type HmacSha256 = Hmac<Sha256>;

pub const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Header set for one signed search-advertising request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub timestamp: String,
    pub api_key: String,
    pub customer_id: String,
    pub signature: String,
}

impl SignedHeaders {
    /// Header name/value pairs in the order they are sent.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("Content-Type", CONTENT_TYPE),
            ("X-Timestamp", &self.timestamp),
            ("X-API-KEY", &self.api_key),
            ("X-Customer", &self.customer_id),
            ("X-Signature", &self.signature),
        ]
    }
}

/// Base64 HMAC-SHA256 of `"{timestamp}.{method}.{path}"` keyed by `secret`.
///
/// # Panics
///
/// Never: HMAC accepts keys of any length.
#[must_use]
pub fn sign(timestamp: &str, method: &str, path: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(format!("{timestamp}.{method}.{path}").as_bytes());
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

/// Builds signed headers stamped with the current wall-clock time.
#[must_use]
pub fn signed_headers(method: &str, path: &str, credentials: &SearchAdCredentials) -> SignedHeaders {
    signed_headers_at(
        chrono::Utc::now().timestamp_millis(),
        method,
        path,
        credentials,
    )
}

/// Builds signed headers for an explicit millisecond Unix timestamp.
#[must_use]
pub fn signed_headers_at(
    timestamp_ms: i64,
    method: &str,
    path: &str,
    credentials: &SearchAdCredentials,
) -> SignedHeaders {
    let timestamp = timestamp_ms.to_string();
    let signature = sign(&timestamp, method, path, &credentials.secret_key);
    SignedHeaders {
        timestamp,
        api_key: credentials.api_key.clone(),
        customer_id: credentials.customer_id.clone(),
        signature,
    }
}
