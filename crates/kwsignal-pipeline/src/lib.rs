//! Keyword signal aggregation.
//!
//! Turns a seed phrase into up to 15 [`KeywordSignal`] records: one keyword
//! tool call for related keywords, then a blog search and a cafe search per
//! keyword, combined into search volume, content volume, recency, and a
//! competition index.

pub mod analyzer;
pub mod cache;
pub mod error;
pub mod normalize;
pub mod recency;

pub use analyzer::{AnalyzerOptions, KeywordAnalyzer};
pub use cache::SignalCache;
pub use error::PipelineError;
pub use kwsignal_core::KeywordSignal;
pub use normalize::{normalize_volume, SUPPRESSED_VOLUME};
pub use recency::{count_recent, recent_cutoff, RECENT_WINDOW_DAYS};
