//! The aggregated per-keyword record and helpers for locating a seed's own
//! record inside a batch.

use serde::Serialize;

/// Version of the [`KeywordSignal`] field set. Bump when a field is added,
/// removed, or changes meaning.
pub const KEYWORD_SIGNAL_SCHEMA_VERSION: u32 = 1;

/// Upper bound on the number of suggestions aggregated per seed phrase.
pub const MAX_SUGGESTIONS: usize = 15;

/// One aggregated record per related keyword.
///
/// Totals and the competition index are derived in [`KeywordSignal::new`]
/// and cannot be set independently, so `search_volume_total` always equals
/// `pc + mobile` and `content_count_total` always equals
/// `primary + secondary`. Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordSignal {
    keyword: String,
    search_volume_pc: u64,
    search_volume_mobile: u64,
    search_volume_total: u64,
    content_count_primary: u64,
    content_count_secondary: u64,
    content_count_total: u64,
    recent_primary_count: u64,
    competition_index: f64,
}

impl KeywordSignal {
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        search_volume_pc: u64,
        search_volume_mobile: u64,
        content_count_primary: u64,
        content_count_secondary: u64,
        recent_primary_count: u64,
    ) -> Self {
        let search_volume_total = search_volume_pc.saturating_add(search_volume_mobile);
        let content_count_total = content_count_primary.saturating_add(content_count_secondary);
        Self {
            keyword: keyword.into(),
            search_volume_pc,
            search_volume_mobile,
            search_volume_total,
            content_count_primary,
            content_count_secondary,
            content_count_total,
            recent_primary_count,
            competition_index: competition_index(content_count_total, search_volume_total),
        }
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn search_volume_pc(&self) -> u64 {
        self.search_volume_pc
    }

    #[must_use]
    pub fn search_volume_mobile(&self) -> u64 {
        self.search_volume_mobile
    }

    #[must_use]
    pub fn search_volume_total(&self) -> u64 {
        self.search_volume_total
    }

    #[must_use]
    pub fn content_count_primary(&self) -> u64 {
        self.content_count_primary
    }

    #[must_use]
    pub fn content_count_secondary(&self) -> u64 {
        self.content_count_secondary
    }

    #[must_use]
    pub fn content_count_total(&self) -> u64 {
        self.content_count_total
    }

    /// Primary-content items published in the last 30 days, counted over the
    /// first page (at most 100 items) of the upstream search. Approximate:
    /// the page order is whatever the upstream service defaults to.
    #[must_use]
    pub fn recent_primary_count(&self) -> u64 {
        self.recent_primary_count
    }

    /// `content_count_total / search_volume_total` rounded to two decimals
    /// with ties to even, or exactly `0.0` when there is no search volume.
    #[must_use]
    pub fn competition_index(&self) -> f64 {
        self.competition_index
    }
}

#[allow(clippy::cast_precision_loss)]
fn competition_index(content_total: u64, search_total: u64) -> f64 {
    if search_total == 0 {
        return 0.0;
    }
    let ratio = content_total as f64 / search_total as f64;
    (ratio * 100.0).round_ties_even() / 100.0
}

/// Removes every whitespace character from a phrase.
///
/// The suggestion service matches hint keywords without spaces, and seed
/// lookup compares phrases in this form.
#[must_use]
pub fn clean_phrase(phrase: &str) -> String {
    phrase.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Locates the record describing the seed phrase itself.
///
/// Matches on whitespace-stripped keywords. Falls back to the first record
/// when the seed is absent from its own suggestions, and returns `None` only
/// for an empty batch.
#[must_use]
pub fn find_seed_signal<'a>(batch: &'a [KeywordSignal], seed: &str) -> Option<&'a KeywordSignal> {
    let target = clean_phrase(seed);
    batch
        .iter()
        .find(|s| clean_phrase(&s.keyword) == target)
        .or_else(|| batch.first())
}
