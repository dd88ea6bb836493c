use std::time::Duration;

use serde::Serialize;

use super::{ConfidenceReport, DegradationEvent, Origin, RankedSet, Summary, SummarizationMode};

/// Which ranker produced the relevance scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    Embedding,
    Lexical,
}

impl RankingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Embedding => "embedding",
            Self::Lexical => "lexical",
        }
    }
}

/// Terminal output of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub query: String,
    pub summary: Summary,
    pub ranked: RankedSet,
    pub confidence: ConfidenceReport,
    pub api_status: Origin,
    pub ranking_mode: RankingMode,
    pub summarization_mode: SummarizationMode,
    pub below_threshold: bool,
    pub degradation_events: Vec<DegradationEvent>,
    pub processing_time: Duration,
}

impl PipelineResult {
    /// Number of documents that informed the answer.
    pub fn papers_analyzed(&self) -> usize {
        self.ranked.len()
    }

    /// True when any stage ran on a fallback path.
    ///
    /// A configured lexical ranker is not a fallback; an embedding failure
    /// that drops to lexical shows up in `degradation_events`.
    pub fn is_degraded(&self) -> bool {
        self.api_status == Origin::Fallback
            || self.summarization_mode == SummarizationMode::Extractive
            || !self.degradation_events.is_empty()
    }
}
