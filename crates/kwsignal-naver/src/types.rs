//! Wire types for the keyword tool and the open search API.
//!
//! Only the fields the aggregation pipeline reads are modelled; everything
//! else in the upstream payloads is ignored.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// keywordstool
// ---------------------------------------------------------------------------

/// Response from `GET /keywordstool`.
///
/// `keyword_list` is `None` when the upstream body lacks the `keywordList`
/// field, which happens on quota and validation failures that still return
/// HTTP 200.
#[derive(Debug, Deserialize)]
pub struct KeywordToolResponse {
    #[serde(rename = "keywordList", default)]
    pub keyword_list: Option<Vec<KeywordIdea>>,
}

/// One related keyword with its raw monthly query counts.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordIdea {
    #[serde(rename = "relKeyword")]
    pub rel_keyword: String,
    #[serde(rename = "monthlyPcQcCnt")]
    pub monthly_pc_qc_cnt: RawVolume,
    #[serde(rename = "monthlyMobileQcCnt")]
    pub monthly_mobile_qc_cnt: RawVolume,
}

/// A monthly query count as sent on the wire.
///
/// Small counts are suppressed and arrive as a string such as `"< 10"`;
/// everything else is a JSON number (occasionally a numeric string).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawVolume {
    Number(serde_json::Number),
    Text(String),
}

// ---------------------------------------------------------------------------
// open search
// ---------------------------------------------------------------------------

/// Response from `GET /v1/search/blog.json`.
#[derive(Debug, Deserialize)]
pub struct BlogSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub items: Vec<BlogPost>,
}

/// One blog item. Only the publish date feeds the recent-post count.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    /// Publish date as `YYYYMMDD`. Missing dates read as `"00000000"`.
    #[serde(default = "default_postdate")]
    pub postdate: String,
}

/// Response from `GET /v1/search/cafearticle.json`. Only the total is read.
#[derive(Debug, Deserialize)]
pub struct CafeSearchResponse {
    #[serde(default)]
    pub total: u64,
}

fn default_postdate() -> String {
    "00000000".to_owned()
}
