use scholar_core::errors::ScholarResult;
use scholar_core::models::{DegradationEvent, Document};
use scholar_core::similarity::relevance;
use scholar_embeddings::EmbeddingEngine;

/// Coherence between a summary and the documents behind it.
#[derive(Debug, Clone)]
pub struct CoherenceScore {
    pub score: f64,
    pub degradation: Vec<DegradationEvent>,
}

/// Mean of `max(0, cosine(summary, doc))` over `docs`.
///
/// The summary and documents are embedded in one batch so every vector comes
/// from the same provider. An empty summary scores 0.0.
pub fn calculate(
    engine: &EmbeddingEngine,
    summary_text: &str,
    docs: &[&Document],
) -> ScholarResult<CoherenceScore> {
    if summary_text.trim().is_empty() || docs.is_empty() {
        return Ok(CoherenceScore {
            score: 0.0,
            degradation: Vec::new(),
        });
    }

    let mut texts = Vec::with_capacity(docs.len() + 1);
    texts.push(summary_text.to_string());
    texts.extend(docs.iter().map(|d| d.ranking_text()));

    let batch = engine.embed_batch_reporting(&texts)?;
    let Some((summary_vec, doc_vecs)) = batch.vectors.split_first() else {
        return Ok(CoherenceScore {
            score: 0.0,
            degradation: batch.degradation,
        });
    };
    let score = super::mean(doc_vecs.iter().map(|v| relevance(summary_vec, v)));

    Ok(CoherenceScore {
        score: score.clamp(0.0, 1.0),
        degradation: batch.degradation,
    })
}
