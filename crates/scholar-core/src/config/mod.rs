//! Configuration for every subsystem, loaded from TOML.
//!
//! Each section is optional; missing fields fall back to `defaults`.

pub mod confidence_config;
pub mod defaults;
pub mod embedding_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod ranking_config;
pub mod source_config;
pub mod summarization_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use confidence_config::{ConfidenceConfig, ConfidenceWeights};
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use ranking_config::RankingConfig;
pub use source_config::SourceConfig;
pub use summarization_config::SummarizationConfig;

use crate::constants::MAX_PAPERS_HARD_CAP;
use crate::errors::{ScholarError, ScholarResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScholarConfig {
    pub sources: SourceConfig,
    pub embedding: EmbeddingConfig,
    pub ranking: RankingConfig,
    pub summarization: SummarizationConfig,
    pub confidence: ConfidenceConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl ScholarConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> ScholarResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| ScholarError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> ScholarResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScholarError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> ScholarResult<String> {
        toml::to_string(self).map_err(|e| ScholarError::ConfigError(e.to_string()))
    }

    /// Reject values no subsystem can work with.
    pub fn validate(&self) -> ScholarResult<()> {
        let p = &self.pipeline;
        if p.time_budget_ms == 0 {
            return Err(invalid("pipeline.time_budget_ms must be > 0"));
        }
        if p.max_papers_cap == 0 || p.max_papers_cap > MAX_PAPERS_HARD_CAP {
            return Err(invalid(&format!(
                "pipeline.max_papers_cap must be in [1, {MAX_PAPERS_HARD_CAP}]"
            )));
        }
        if p.max_query_chars == 0 {
            return Err(invalid("pipeline.max_query_chars must be > 0"));
        }

        let s = &self.sources;
        if s.primary_timeout_ms == 0 || s.secondary_timeout_ms == 0 {
            return Err(invalid("source timeouts must be > 0"));
        }

        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.ranking.min_relevance) {
            return Err(invalid("ranking.min_relevance must be in [0, 1]"));
        }

        let sum = &self.summarization;
        if sum.sentences_per_document == 0 || sum.max_summary_sentences == 0 {
            return Err(invalid("summarization sentence limits must be > 0"));
        }
        if !(0.0..=1.0).contains(&sum.traceability_threshold) {
            return Err(invalid("summarization.traceability_threshold must be in [0, 1]"));
        }

        let c = &self.confidence;
        let w = &c.weights;
        let weights = [w.source, w.coherence, w.temporal];
        if weights.iter().any(|x| !x.is_finite() || *x < 0.0) {
            return Err(invalid("confidence weights must be finite and non-negative"));
        }
        if w.total() <= 0.0 {
            return Err(invalid("confidence weights must not all be zero"));
        }
        if c.half_life_years <= 0.0 {
            return Err(invalid("confidence.half_life_years must be > 0"));
        }
        if !(0.0..=1.0).contains(&c.unknown_year_score) {
            return Err(invalid("confidence.unknown_year_score must be in [0, 1]"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> ScholarError {
    ScholarError::ConfigError(reason.to_string())
}
