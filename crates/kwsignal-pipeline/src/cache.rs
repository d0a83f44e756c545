//! Time-boxed cache of aggregated batches, keyed by cleaned seed phrase.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use kwsignal_core::KeywordSignal;

struct CacheEntry {
    stored_at: Instant,
    /// Recency cutoff (`YYYYMMDD`) the batch was computed against.
    cutoff: String,
    signals: Vec<KeywordSignal>,
}

/// Advisory result cache. A hit only saves upstream calls; it never changes
/// what a fresh aggregation would have returned within the TTL.
///
/// An entry only answers lookups made with the same recency cutoff, so a
/// batch is never reused across a change of day.
pub struct SignalCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl SignalCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str, cutoff: &str) -> Option<Vec<KeywordSignal>> {
        self.get_at(key, cutoff, Instant::now())
    }

    pub fn insert(&self, key: &str, cutoff: &str, signals: Vec<KeywordSignal>) {
        self.insert_at(key, cutoff, signals, Instant::now());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn get_at(&self, key: &str, cutoff: &str, now: Instant) -> Option<Vec<KeywordSignal>> {
        let mut entries = self.lock();
        let expired = match entries.get(key) {
            None => return None,
            Some(entry) => self.is_expired(entry, now),
        };
        if expired {
            entries.remove(key);
            tracing::debug!(key, "evicted expired cache entry");
            return None;
        }
        entries
            .get(key)
            .filter(|e| e.cutoff == cutoff)
            .map(|e| e.signals.clone())
    }

    /// Stores a batch, first dropping every entry whose TTL has elapsed.
    fn insert_at(&self, key: &str, cutoff: &str, signals: Vec<KeywordSignal>, now: Instant) {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, e| !self.is_expired(e, now));
        let evicted = before - entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, "swept expired cache entries");
        }
        entries.insert(
            key.to_owned(),
            CacheEntry {
                stored_at: now,
                cutoff: cutoff.to_owned(),
                signals,
            },
        );
    }

    fn is_expired(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) >= self.ttl
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
