//! Result cache keyed by (normalized query, max_papers).

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use scholar_core::config::PipelineConfig;
use scholar_core::models::{PipelineResult, ResearchQuery};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    query: String,
    max_papers: usize,
}

impl CacheKey {
    fn of(query: &ResearchQuery) -> Self {
        Self {
            query: query.normalized_text(),
            max_papers: query.max_papers(),
        }
    }
}

/// Bounded TTL cache of completed pipeline results.
pub struct ResultCache {
    cache: Cache<CacheKey, Arc<PipelineResult>>,
}

impl ResultCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        )
    }

    pub fn get(&self, query: &ResearchQuery) -> Option<Arc<PipelineResult>> {
        self.cache.get(&CacheKey::of(query))
    }

    pub fn insert(&self, query: &ResearchQuery, result: Arc<PipelineResult>) {
        self.cache.insert(CacheKey::of(query), result);
    }

    /// Approximate number of entries (moka updates counts lazily).
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
