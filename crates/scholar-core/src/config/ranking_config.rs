use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Preferred ranker: "embedding" (falls back to lexical) or "lexical".
    pub strategy: String,
    /// Candidates scoring below this relevance are dropped.
    pub min_relevance: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            strategy: defaults::DEFAULT_RANKING_STRATEGY.to_string(),
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
        }
    }
}
