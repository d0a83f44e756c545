//! Clients for the Naver search-advertising keyword tool and the Naver
//! open search API.
//!
//! [`SearchAdClient`] signs each request with [`signed_headers`];
//! [`ContentSearchClient`] authenticates with a static client id/secret pair.

pub mod content;
pub mod error;
pub mod searchad;
pub mod signature;
pub mod types;

mod http;

pub use content::{ContentSearchClient, OpenApiCredentials};
pub use error::NaverError;
pub use searchad::{SearchAdClient, SearchAdCredentials, KEYWORDS_TOOL_PATH};
pub use signature::{sign, signed_headers, signed_headers_at, SignedHeaders};
pub use types::{
    BlogPost, BlogSearchResponse, CafeSearchResponse, KeywordIdea, KeywordToolResponse, RawVolume,
};
