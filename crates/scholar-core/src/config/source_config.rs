use serde::{Deserialize, Serialize};

use super::defaults;

/// Source Gateway configuration: upstream endpoints and timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the Semantic Scholar Graph API (primary source).
    pub semantic_scholar_url: String,
    /// Optional Semantic Scholar API key, sent as `x-api-key`.
    pub semantic_scholar_api_key: Option<String>,
    /// MediaWiki API endpoint (secondary source).
    pub wikipedia_url: String,
    /// User agent sent to both upstreams.
    pub user_agent: String,
    /// Timeout for the primary call in milliseconds.
    pub primary_timeout_ms: u64,
    /// Timeout for the secondary call in milliseconds.
    pub secondary_timeout_ms: u64,
    /// Candidates requested per wanted paper, for ranking headroom.
    pub overfetch_factor: usize,
    /// Upper bound on candidates requested from a single source.
    pub max_fetch: usize,
}

impl SourceConfig {
    /// Number of candidates to request upstream for `max_papers` results.
    pub fn fetch_limit(&self, max_papers: usize) -> usize {
        max_papers
            .saturating_mul(self.overfetch_factor.max(1))
            .clamp(1, self.max_fetch.clamp(1, crate::constants::MAX_FETCH_HARD_CAP))
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            semantic_scholar_url: defaults::DEFAULT_SEMANTIC_SCHOLAR_URL.to_string(),
            semantic_scholar_api_key: None,
            wikipedia_url: defaults::DEFAULT_WIKIPEDIA_URL.to_string(),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            primary_timeout_ms: defaults::DEFAULT_PRIMARY_TIMEOUT_MS,
            secondary_timeout_ms: defaults::DEFAULT_SECONDARY_TIMEOUT_MS,
            overfetch_factor: defaults::DEFAULT_OVERFETCH_FACTOR,
            max_fetch: defaults::DEFAULT_MAX_FETCH,
        }
    }
}
