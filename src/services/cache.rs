use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use crate::models::Person;

/// In-memory cache of match results, keyed by request id
///
/// Entries expire after the configured TTL. Registration of a new person
/// clears everything; closing a request drops that request's entry.
///
/// Each entry carries the generation it was computed under. A result that
/// finishes computing after `invalidate_all` is stored with a stale
/// generation and never served.
pub struct MatchCache {
    entries: moka::future::Cache<String, Arc<CachedMatches>>,
    generation: AtomicU64,
}

/// A cached matcher run
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMatches {
    pub donors: Vec<Person>,
    pub total_candidates: usize,
    pub generation: u64,
}

impl MatchCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            entries,
            generation: AtomicU64::new(0),
        }
    }

    /// Read before loading the candidate snapshot; pass to `insert`
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub async fn get(&self, request_id: &str) -> Option<Arc<CachedMatches>> {
        let hit = self.entries.get(request_id).await?;
        if hit.generation != self.generation() {
            return None;
        }
        tracing::trace!("Match cache hit: {}", request_id);
        Some(hit)
    }

    pub async fn insert(&self, request_id: &str, matches: CachedMatches) -> Arc<CachedMatches> {
        let matches = Arc::new(matches);
        if matches.generation == self.generation() {
            self.entries
                .insert(request_id.to_string(), Arc::clone(&matches))
                .await;
        }
        matches
    }

    pub async fn invalidate(&self, request_id: &str) {
        self.entries.invalidate(request_id).await;
    }

    /// Drop every entry, e.g. after the donor population changed
    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.entries.invalidate_all();
        tracing::debug!("Match cache cleared");
    }
}
