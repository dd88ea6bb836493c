use serde::{Deserialize, Serialize};

use super::defaults;

/// Summarization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizationConfig {
    /// Sentences extracted per document.
    pub sentences_per_document: usize,
    /// Cap on extracted sentences across all documents.
    pub max_summary_sentences: usize,
    /// Sentences shorter than this are never extracted.
    pub min_sentence_chars: usize,
    /// Run the abstractive phase. When false, output is extractive-only.
    pub abstractive_enabled: bool,
    /// Minimum share of an output sentence's terms that must come from one extract.
    pub traceability_threshold: f64,
    /// Salience weight of sentence position.
    pub position_weight: f64,
    /// Salience weight of in-document term frequency.
    pub term_frequency_weight: f64,
    /// Salience weight of query term overlap.
    pub query_overlap_weight: f64,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            sentences_per_document: defaults::DEFAULT_SENTENCES_PER_DOCUMENT,
            max_summary_sentences: defaults::DEFAULT_MAX_SUMMARY_SENTENCES,
            min_sentence_chars: defaults::DEFAULT_MIN_SENTENCE_CHARS,
            abstractive_enabled: defaults::DEFAULT_ABSTRACTIVE_ENABLED,
            traceability_threshold: defaults::DEFAULT_TRACEABILITY_THRESHOLD,
            position_weight: defaults::DEFAULT_POSITION_WEIGHT,
            term_frequency_weight: defaults::DEFAULT_TERM_FREQUENCY_WEIGHT,
            query_overlap_weight: defaults::DEFAULT_QUERY_OVERLAP_WEIGHT,
        }
    }
}
