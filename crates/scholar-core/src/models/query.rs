use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::errors::{ScholarError, ScholarResult};

/// A research question as accepted by the pipeline.
///
/// Fields are private: build with [`ResearchQuery::new`] and the `with_*`
/// methods, then call [`validate`](ResearchQuery::validate) before running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchQuery {
    text: String,
    max_papers: usize,
    min_confidence: Option<f64>,
    include_abstract: bool,
}

impl ResearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_papers: crate::config::defaults::DEFAULT_MAX_PAPERS,
            min_confidence: None,
            include_abstract: true,
        }
    }

    pub fn with_max_papers(mut self, max_papers: usize) -> Self {
        self.max_papers = max_papers;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = Some(min_confidence);
        self
    }

    pub fn with_include_abstract(mut self, include_abstract: bool) -> Self {
        self.include_abstract = include_abstract;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_papers(&self) -> usize {
        self.max_papers
    }

    pub fn min_confidence(&self) -> Option<f64> {
        self.min_confidence
    }

    pub fn include_abstract(&self) -> bool {
        self.include_abstract
    }

    /// Lowercased text with runs of whitespace collapsed. Used as cache key.
    pub fn normalized_text(&self) -> String {
        self.text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check the query against the pipeline's acceptance bounds.
    pub fn validate(&self, config: &PipelineConfig) -> ScholarResult<()> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(invalid("query text is empty"));
        }
        let chars = trimmed.chars().count();
        if chars > config.max_query_chars {
            return Err(invalid(format!(
                "query is {chars} characters, limit is {}",
                config.max_query_chars
            )));
        }
        if self.max_papers == 0 || self.max_papers > config.max_papers_cap {
            return Err(invalid(format!(
                "max_papers must be in [1, {}], got {}",
                config.max_papers_cap, self.max_papers
            )));
        }
        if let Some(min) = self.min_confidence {
            if !min.is_finite() || !(0.0..=1.0).contains(&min) {
                return Err(invalid(format!(
                    "min_confidence must be in [0, 1], got {min}"
                )));
            }
        }
        Ok(())
    }

    /// Whether a confidence value falls short of this query's threshold.
    pub fn is_below_threshold(&self, confidence: f64) -> bool {
        self.min_confidence.is_some_and(|min| confidence < min)
    }
}

fn invalid(reason: impl Into<String>) -> ScholarError {
    ScholarError::InvalidQuery {
        reason: reason.into(),
    }
}
