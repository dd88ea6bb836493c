use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator configuration: validation bounds, time budget, result cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Wall-clock budget for one run, in milliseconds.
    pub time_budget_ms: u64,
    /// Largest accepted `max_papers`.
    pub max_papers_cap: usize,
    /// Longest accepted query, in characters.
    pub max_query_chars: usize,
    /// Enable the (query, max_papers) result cache.
    pub cache_enabled: bool,
    /// Result cache time-to-live in seconds.
    pub cache_ttl_secs: u64,
    /// Result cache max entries.
    pub cache_capacity: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: defaults::DEFAULT_TIME_BUDGET_MS,
            max_papers_cap: defaults::DEFAULT_MAX_PAPERS_CAP,
            max_query_chars: defaults::DEFAULT_MAX_QUERY_CHARS,
            cache_enabled: defaults::DEFAULT_CACHE_ENABLED,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}
