use std::sync::Arc;

use scholar_core::config::ConfidenceConfig;
use scholar_core::constants::components;
use scholar_core::models::{ConfidenceReport, DegradationEvent, Document, RankedSet, Summary};
use scholar_embeddings::EmbeddingEngine;
use tracing::{debug, warn};

use crate::factors::{coherence, source, temporal};

/// A report plus any degradation incurred computing it.
#[derive(Debug, Clone)]
pub struct ConfidenceOutcome {
    pub report: ConfidenceReport,
    pub degradation: Vec<DegradationEvent>,
}

/// Three-signal confidence ensemble.
pub struct ConfidenceEstimator {
    engine: Arc<EmbeddingEngine>,
    config: ConfidenceConfig,
}

impl ConfidenceEstimator {
    pub fn new(engine: Arc<EmbeddingEngine>, config: ConfidenceConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// Score `summary` against the documents it was built from.
    pub fn score(&self, ranked: &RankedSet, summary: &Summary, reference_year: i32) -> ConfidenceReport {
        self.score_reporting(ranked, summary, reference_year).report
    }

    /// Like [`score`](Self::score), also returning degradation events.
    ///
    /// Scored documents are the summary's citations, or the whole ranked set
    /// when nothing was cited. An embedding failure scores coherence 0.0.
    pub fn score_reporting(
        &self,
        ranked: &RankedSet,
        summary: &Summary,
        reference_year: i32,
    ) -> ConfidenceOutcome {
        let docs: Vec<&Document> = if summary.cited.is_empty() {
            ranked.iter().collect()
        } else {
            summary.cited.iter().collect()
        };

        let source_score = source::calculate(&docs, &self.config);
        let temporal_score = temporal::calculate(&docs, reference_year, &self.config);

        let mut degradation = Vec::new();
        let coherence_score = match coherence::calculate(&self.engine, &summary.text, &docs) {
            Ok(c) => {
                degradation.extend(c.degradation);
                c.score
            }
            Err(e) => {
                warn!(error = %e, "coherence embedding failed, scoring coherence 0");
                degradation.push(DegradationEvent::now(
                    components::CONFIDENCE,
                    e.to_string(),
                    "coherence=0",
                ));
                0.0
            }
        };

        let report = ConfidenceReport::combine(
            source_score,
            coherence_score,
            temporal_score,
            &self.config.weights,
        );
        debug!(
            documents = docs.len(),
            source = report.source_score,
            coherence = report.coherence_score,
            temporal = report.temporal_score,
            confidence = report.confidence,
            "confidence scored"
        );

        ConfidenceOutcome {
            report,
            degradation,
        }
    }
}
