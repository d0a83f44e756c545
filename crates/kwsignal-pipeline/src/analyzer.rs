//! Aggregation pipeline orchestration.

use std::time::Duration;

use chrono::NaiveDate;
use futures::stream::{self, StreamExt, TryStreamExt};
use kwsignal_core::{clean_phrase, AppConfig, KeywordSignal, MAX_SUGGESTIONS};
use kwsignal_naver::{
    ContentSearchClient, KeywordIdea, OpenApiCredentials, RawVolume, SearchAdClient,
    SearchAdCredentials,
};

use crate::cache::SignalCache;
use crate::error::PipelineError;
use crate::normalize::normalize_volume;
use crate::recency::{count_recent, recent_cutoff, PRIMARY_PAGE_SIZE};

/// Results requested from the secondary search; only its total is read.
const SECONDARY_PAGE_SIZE: u32 = 1;

#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Suggestions aggregated per seed, clamped to [`MAX_SUGGESTIONS`].
    pub max_suggestions: usize,
    /// Keywords looked up in parallel. `1` issues every call sequentially.
    pub max_concurrent_lookups: usize,
    /// `None` disables the result cache.
    pub cache_ttl: Option<Duration>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
            max_concurrent_lookups: 1,
            cache_ttl: Some(Duration::from_secs(600)),
        }
    }
}

impl AnalyzerOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_suggestions: config.max_suggestions,
            max_concurrent_lookups: config.max_concurrent_lookups,
            cache_ttl: (config.cache_ttl_secs > 0)
                .then(|| Duration::from_secs(config.cache_ttl_secs)),
        }
    }
}

/// Runs the keyword tool → content search → derivation pipeline for a seed
/// phrase.
pub struct KeywordAnalyzer {
    search_ad: SearchAdClient,
    content: ContentSearchClient,
    options: AnalyzerOptions,
    cache: Option<SignalCache>,
}

impl KeywordAnalyzer {
    #[must_use]
    pub fn new(
        search_ad: SearchAdClient,
        content: ContentSearchClient,
        options: AnalyzerOptions,
    ) -> Self {
        let cache = options.cache_ttl.map(SignalCache::new);
        Self {
            search_ad,
            content,
            options,
            cache,
        }
    }

    /// Builds both upstream clients from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Upstream`] if either HTTP client cannot be
    /// constructed or a configured base URL is invalid.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let search_ad = SearchAdClient::with_base_url(
            SearchAdCredentials::new(
                &config.ad_access_key,
                &config.ad_secret_key,
                &config.ad_customer_id,
            ),
            config.request_timeout_secs,
            &config.user_agent,
            &config.searchad_base_url,
        )?;
        let content = ContentSearchClient::with_base_url(
            OpenApiCredentials::new(&config.naver_client_id, &config.naver_client_secret),
            config.request_timeout_secs,
            &config.user_agent,
            &config.openapi_base_url,
        )?;
        Ok(Self::new(
            search_ad,
            content,
            AnalyzerOptions::from_app_config(config),
        ))
    }

    #[must_use]
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Aggregates signals for `seed`, collapsing every failure to an empty
    /// batch.
    ///
    /// Use [`try_aggregate`](Self::try_aggregate) to tell "no suggestions"
    /// apart from "upstream unavailable".
    pub async fn aggregate(&self, seed: &str) -> Vec<KeywordSignal> {
        match self.try_aggregate(seed).await {
            Ok(signals) => signals,
            Err(e) => {
                tracing::warn!(seed, error = %e, "aggregation failed, returning empty batch");
                Vec::new()
            }
        }
    }

    /// Aggregates signals for `seed` relative to today's local date.
    ///
    /// `Ok(vec![])` means the keyword tool returned an empty list.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Upstream`] if any of the upstream calls fails.
    /// - [`PipelineError::MissingKeywordList`] if the keyword tool response
    ///   has no `keywordList`.
    /// - [`PipelineError::InvalidVolume`] if a monthly count is unparseable.
    ///
    /// A failure on any single keyword fails the whole batch.
    pub async fn try_aggregate(&self, seed: &str) -> Result<Vec<KeywordSignal>, PipelineError> {
        self.try_aggregate_as_of(seed, chrono::Local::now().date_naive())
            .await
    }

    /// Like [`try_aggregate`](Self::try_aggregate) with an explicit `today`
    /// anchoring the recency window.
    ///
    /// # Errors
    ///
    /// See [`try_aggregate`](Self::try_aggregate).
    pub async fn try_aggregate_as_of(
        &self,
        seed: &str,
        today: NaiveDate,
    ) -> Result<Vec<KeywordSignal>, PipelineError> {
        let hint = clean_phrase(seed);
        let cutoff = recent_cutoff(today);

        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(&hint, &cutoff)) {
            tracing::debug!(seed = %hint, count = cached.len(), "serving batch from cache");
            return Ok(cached);
        }

        let response = self.search_ad.keyword_ideas(&hint).await?;
        let ideas = response
            .keyword_list
            .ok_or_else(|| PipelineError::MissingKeywordList { seed: hint.clone() })?;

        let limit = self.options.max_suggestions.clamp(1, MAX_SUGGESTIONS);
        let width = self.options.max_concurrent_lookups.max(1);

        let signals: Vec<KeywordSignal> = stream::iter(ideas.into_iter().take(limit))
            .map(|idea| self.lookup(idea, &cutoff))
            .buffered(width)
            .try_collect()
            .await?;

        tracing::info!(seed = %hint, count = signals.len(), "aggregated keyword signals");

        if let Some(cache) = &self.cache {
            cache.insert(&hint, &cutoff, signals.clone());
        }
        Ok(signals)
    }

    async fn lookup(&self, idea: KeywordIdea, cutoff: &str) -> Result<KeywordSignal, PipelineError> {
        let keyword = idea.rel_keyword;
        let pc = volume(&keyword, &idea.monthly_pc_qc_cnt)?;
        let mobile = volume(&keyword, &idea.monthly_mobile_qc_cnt)?;

        #[allow(clippy::cast_possible_truncation)]
        let blog = self
            .content
            .search_blog(&keyword, PRIMARY_PAGE_SIZE as u32)
            .await?;
        let cafe = self
            .content
            .search_cafe(&keyword, SECONDARY_PAGE_SIZE)
            .await?;

        let recent = count_recent(&blog.items, cutoff);
        tracing::debug!(
            keyword = %keyword,
            pc,
            mobile,
            blog = blog.total,
            cafe = cafe.total,
            recent,
            "keyword lookup complete"
        );
        Ok(KeywordSignal::new(
            keyword, pc, mobile, blog.total, cafe.total, recent,
        ))
    }
}

fn volume(keyword: &str, raw: &RawVolume) -> Result<u64, PipelineError> {
    normalize_volume(raw).ok_or_else(|| PipelineError::InvalidVolume {
        keyword: keyword.to_owned(),
        raw: match raw {
            RawVolume::Number(n) => n.to_string(),
            RawVolume::Text(s) => s.clone(),
        },
    })
}
