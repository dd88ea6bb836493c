//! SharedModels: the process-wide model singleton.
//!
//! Loading an embedding model is expensive, so the engine and the abstractive
//! summarizer are built once behind `OnceLock` and shared by every request.
//! Both are read-only after construction.

use std::sync::{Arc, OnceLock};

use scholar_core::config::EmbeddingConfig;
use scholar_core::traits::IAbstractiveSummarizer;
use scholar_embeddings::EmbeddingEngine;
use scholar_summarization::SentenceFusion;
use tracing::info;

static SHARED: OnceLock<Arc<SharedModels>> = OnceLock::new();

pub struct SharedModels {
    pub embeddings: Arc<EmbeddingEngine>,
    pub summarizer: Arc<dyn IAbstractiveSummarizer>,
}

impl SharedModels {
    /// Build a fresh, unshared set of models.
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self::from_parts(
            Arc::new(EmbeddingEngine::new(config.clone())),
            Arc::new(SentenceFusion),
        )
    }

    pub fn from_parts(
        embeddings: Arc<EmbeddingEngine>,
        summarizer: Arc<dyn IAbstractiveSummarizer>,
    ) -> Self {
        Self {
            embeddings,
            summarizer,
        }
    }

    /// The process-wide instance, built from `config` on first call.
    ///
    /// Concurrent first callers initialize it exactly once; later calls
    /// ignore `config`.
    pub fn global(config: &EmbeddingConfig) -> Arc<SharedModels> {
        SHARED
            .get_or_init(|| {
                let models = Self::new(config);
                info!(
                    embedding = models.embeddings.active_provider(),
                    summarizer = models.summarizer.name(),
                    "shared models initialized"
                );
                Arc::new(models)
            })
            .clone()
    }

    /// Check if the global instance has been built.
    pub fn is_initialized() -> bool {
        SHARED.get().is_some()
    }
}
