//! L1 in-memory cache using moka.
//!
//! Keys are blake3 hashes of the embedded text. Only vectors produced by the
//! chain's primary provider are stored, so a hit never mixes vector spaces.

use std::time::Duration;

use moka::sync::Cache;

/// L1 in-memory embedding cache.
pub struct L1MemoryCache {
    cache: Cache<String, Vec<f32>>,
}

impl L1MemoryCache {
    /// Create a new L1 cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();

        Self { cache }
    }

    /// Content hash used as the cache key.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(text))
    }

    pub fn insert(&self, text: &str, embedding: Vec<f32>) {
        self.cache.insert(Self::key(text), embedding);
    }

    /// Approximate number of entries (moka updates counts lazily).
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = L1MemoryCache::new(100);
        cache.insert("surface codes", vec![1.0, 2.0, 3.0]);
        assert_eq!(cache.get("surface codes"), Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = L1MemoryCache::new(100);
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn keys_are_content_hashes() {
        assert_eq!(L1MemoryCache::key("a"), L1MemoryCache::key("a"));
        assert_ne!(L1MemoryCache::key("a"), L1MemoryCache::key("b"));
        assert_eq!(L1MemoryCache::key("a").len(), 64);
    }

    #[test]
    fn clear_empties_cache() {
        let cache = L1MemoryCache::new(100);
        cache.insert("a", vec![1.0]);
        cache.clear();
        assert_eq!(cache.get("a"), None);
    }
}
