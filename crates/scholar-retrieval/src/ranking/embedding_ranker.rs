//! Cosine ranking over embedding vectors.

use std::sync::Arc;

use scholar_core::errors::{EmbeddingError, ScholarResult};
use scholar_core::models::{DegradationEvent, Document};
use scholar_core::similarity::{is_degenerate, relevance};
use scholar_embeddings::EmbeddingEngine;

/// Scores plus any provider fallback the engine went through.
#[derive(Debug, Clone)]
pub struct EmbeddingScores {
    pub scores: Vec<f64>,
    pub provider: String,
    pub degradation: Vec<DegradationEvent>,
}

#[derive(Clone)]
pub struct EmbeddingRanker {
    engine: Arc<EmbeddingEngine>,
}

impl EmbeddingRanker {
    pub fn new(engine: Arc<EmbeddingEngine>) -> Self {
        Self { engine }
    }

    /// Embed the query with the documents in one batch so all vectors share
    /// a provider, then score `max(0, cosine)`.
    ///
    /// # Errors
    /// The engine's error, or `EmbeddingError::DegenerateOutput` when the
    /// query vector or every document vector is degenerate.
    pub fn score(&self, query: &str, documents: &[Document]) -> ScholarResult<EmbeddingScores> {
        let mut texts = Vec::with_capacity(documents.len() + 1);
        texts.push(query.to_string());
        texts.extend(documents.iter().map(Document::ranking_text));

        let batch = self.engine.embed_batch_reporting(&texts)?;
        let Some((query_vec, doc_vecs)) = batch.vectors.split_first() else {
            return Err(degenerate(&batch.provider, "no vectors returned"));
        };
        if is_degenerate(query_vec) {
            return Err(degenerate(&batch.provider, "query vector is degenerate"));
        }
        if !doc_vecs.is_empty() && doc_vecs.iter().all(|v| is_degenerate(v)) {
            return Err(degenerate(&batch.provider, "all document vectors are degenerate"));
        }

        Ok(EmbeddingScores {
            scores: doc_vecs.iter().map(|v| relevance(query_vec, v)).collect(),
            provider: batch.provider,
            degradation: batch.degradation,
        })
    }
}

fn degenerate(provider: &str, reason: &str) -> scholar_core::ScholarError {
    EmbeddingError::DegenerateOutput {
        provider: provider.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
