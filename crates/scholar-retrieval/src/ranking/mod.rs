//! Ranking service: ranker selection, fallback, filtering, ordering.

pub mod embedding_ranker;
pub mod lexical;

pub use embedding_ranker::EmbeddingRanker;
pub use lexical::LexicalRanker;

use std::sync::Arc;

use scholar_core::config::RankingConfig;
use scholar_core::constants::components;
use scholar_core::models::{DegradationEvent, Document, RankedSet, RankingMode};
use scholar_embeddings::EmbeddingEngine;
use tracing::{debug, warn};

/// The scoring strategy, chosen by configuration and fallback policy.
#[derive(Clone)]
pub enum Ranker {
    Embedding(EmbeddingRanker),
    Lexical(LexicalRanker),
}

impl Ranker {
    pub fn mode(&self) -> RankingMode {
        match self {
            Self::Embedding(_) => RankingMode::Embedding,
            Self::Lexical(_) => RankingMode::Lexical,
        }
    }
}

/// Result of ranking one candidate list.
#[derive(Debug, Clone)]
pub struct RankingOutcome {
    pub ranked: RankedSet,
    pub mode: RankingMode,
    pub degradation: Vec<DegradationEvent>,
}

pub struct RankingService {
    preferred: Ranker,
    config: RankingConfig,
}

impl RankingService {
    pub fn new(engine: Arc<EmbeddingEngine>, config: RankingConfig) -> Self {
        let preferred = if config.strategy.eq_ignore_ascii_case("lexical") {
            Ranker::Lexical(LexicalRanker)
        } else {
            Ranker::Embedding(EmbeddingRanker::new(engine))
        };
        Self { preferred, config }
    }

    pub fn preferred_mode(&self) -> RankingMode {
        self.preferred.mode()
    }

    /// Rank `documents` against `query`, keeping at most `max_papers`.
    ///
    /// Never fails: embedding trouble degrades to lexical scoring.
    pub fn rank(&self, query: &str, documents: Vec<Document>, max_papers: usize) -> RankingOutcome {
        if documents.is_empty() {
            return RankingOutcome {
                ranked: RankedSet::empty(),
                mode: self.preferred.mode(),
                degradation: Vec::new(),
            };
        }

        let mut degradation = Vec::new();
        let (scores, mode) = match &self.preferred {
            Ranker::Lexical(lexical) => (lexical.score(query, &documents), RankingMode::Lexical),
            Ranker::Embedding(embedding) => match embedding.score(query, &documents) {
                Ok(out) => {
                    degradation.extend(out.degradation);
                    (out.scores, RankingMode::Embedding)
                }
                Err(e) => {
                    warn!(error = %e, "embedding ranking failed, using lexical ranking");
                    degradation.push(DegradationEvent::now(
                        components::RANKING,
                        e.to_string(),
                        lexical::LEXICAL_NAME,
                    ));
                    (LexicalRanker.score(query, &documents), RankingMode::Lexical)
                }
            },
        };

        let candidates = documents.len();
        let kept: Vec<Document> = documents
            .into_iter()
            .zip(scores)
            .map(|(doc, score)| doc.with_relevance(score))
            .filter(|doc| doc.relevance_score >= self.config.min_relevance)
            .collect();
        let ranked = RankedSet::from_scored(kept, max_papers);

        debug!(
            mode = mode.as_str(),
            candidates,
            ranked = ranked.len(),
            "ranking complete"
        );

        RankingOutcome {
            ranked,
            mode,
            degradation,
        }
    }
}
