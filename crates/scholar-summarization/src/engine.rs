//! Summarization engine: extractive selection, then optional abstractive
//! fusion behind the traceability guard.

use std::sync::Arc;

use scholar_core::config::SummarizationConfig;
use scholar_core::constants::components;
use scholar_core::errors::SummarizationError;
use scholar_core::models::{
    DegradationEvent, Document, ExtractedSentence, RankedSet, SummarizationMode, Summary,
};
use scholar_core::traits::IAbstractiveSummarizer;
use tracing::{debug, warn};

use crate::extractive::ExtractiveSelector;
use crate::fusion::CONNECTIVES;
use crate::traceability;

const EXTRACTIVE_FALLBACK: &str = "extractive";
const EMPTY_FALLBACK: &str = "empty";

/// A summary plus any degradation incurred producing it.
#[derive(Debug, Clone)]
pub struct SummarizationOutcome {
    pub summary: Summary,
    pub degradation: Vec<DegradationEvent>,
}

pub struct SummarizationEngine {
    selector: ExtractiveSelector,
    abstractive: Option<Arc<dyn IAbstractiveSummarizer>>,
    config: SummarizationConfig,
}

impl SummarizationEngine {
    pub fn new(
        config: SummarizationConfig,
        abstractive: Option<Arc<dyn IAbstractiveSummarizer>>,
    ) -> Self {
        Self {
            selector: ExtractiveSelector::new(config.clone()),
            abstractive,
            config,
        }
    }

    /// Summarize `ranked` for `query`. Never fails.
    ///
    /// Every cited document is a member of `ranked`.
    pub fn summarize(&self, query: &str, ranked: &RankedSet) -> SummarizationOutcome {
        let extracts = self.selector.select(query, ranked);
        if extracts.is_empty() {
            let mut degradation = Vec::new();
            if !ranked.is_empty() {
                warn!(documents = ranked.len(), "ranked documents yielded no sentences");
                degradation.push(DegradationEvent::now(
                    components::SUMMARIZATION,
                    format!("no extractable sentences in {} ranked documents", ranked.len()),
                    EMPTY_FALLBACK,
                ));
            }
            return SummarizationOutcome {
                summary: Summary::empty(),
                degradation,
            };
        }

        let cited = cited_documents(&extracts, ranked);
        let extractive_text = extracts
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let (text, mode, degradation) = match self.abstractive(query, &extracts, &cited) {
            Ok(text) => (text, SummarizationMode::Abstractive, Vec::new()),
            Err(e) => {
                warn!(error = %e, "abstractive summarization unavailable, using extracts");
                let event =
                    DegradationEvent::now(components::SUMMARIZATION, e.to_string(), EXTRACTIVE_FALLBACK);
                (extractive_text, SummarizationMode::Extractive, vec![event])
            }
        };

        debug!(
            mode = mode.as_str(),
            extracts = extracts.len(),
            cited = cited.len(),
            "summary produced"
        );

        SummarizationOutcome {
            summary: Summary {
                text,
                cited,
                extracts,
                mode,
            },
            degradation,
        }
    }

    fn abstractive(
        &self,
        query: &str,
        extracts: &[ExtractedSentence],
        cited: &[Document],
    ) -> Result<String, SummarizationError> {
        let summarizer = match &self.abstractive {
            Some(s) if self.config.abstractive_enabled => s,
            Some(s) => {
                return Err(SummarizationError::AbstractiveUnavailable {
                    name: format!("{} (disabled)", s.name()),
                })
            }
            None => {
                return Err(SummarizationError::AbstractiveUnavailable {
                    name: "none configured".to_string(),
                })
            }
        };
        if !summarizer.is_available() {
            return Err(SummarizationError::AbstractiveUnavailable {
                name: summarizer.name().to_string(),
            });
        }

        let text = summarizer.summarize(query, extracts, cited)?;
        if text.trim().is_empty() {
            return Err(SummarizationError::GenerationFailed {
                reason: format!("{} returned empty text", summarizer.name()),
            });
        }
        traceability::verify(
            &text,
            extracts,
            self.config.traceability_threshold,
            CONNECTIVES,
        )?;
        Ok(text)
    }
}

/// Documents that contributed at least one extract, in contribution order.
fn cited_documents(extracts: &[ExtractedSentence], ranked: &RankedSet) -> Vec<Document> {
    let mut cited: Vec<Document> = Vec::new();
    for extract in extracts {
        if cited.iter().any(|d| d.url == extract.document_url) {
            continue;
        }
        if let Some(doc) = ranked.get(&extract.document_url) {
            cited.push(doc.clone());
        }
    }
    cited
}
