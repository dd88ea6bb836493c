//! EmbeddingEngine: the entry point for scholar-embeddings.
//!
//! Coordinates the provider chain and the L1 cache. Implements
//! `IEmbeddingProvider` so it can stand in for a single provider.

use scholar_core::config::EmbeddingConfig;
use scholar_core::errors::ScholarResult;
use scholar_core::models::DegradationEvent;
use scholar_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::L1MemoryCache;
use crate::degradation::DegradationChain;
use crate::providers::{self, HashedTfProvider};

/// Vectors for a batch of texts, all from the same provider.
#[derive(Debug, Clone)]
pub struct EmbeddedBatch {
    pub vectors: Vec<Vec<f32>>,
    pub provider: String,
    pub degradation: Vec<DegradationEvent>,
}

/// Shared, read-only embedding engine.
pub struct EmbeddingEngine {
    chain: DegradationChain,
    cache: L1MemoryCache,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Build the engine from configuration.
    pub fn new(config: EmbeddingConfig) -> Self {
        let mut chain = DegradationChain::new(config.dimensions);
        if let Some(primary) = providers::create_primary(&config) {
            chain.push(primary);
        }
        chain.push(Box::new(HashedTfProvider::new(config.dimensions)));
        Self::from_chain(chain, config)
    }

    /// Build the engine around an explicit chain.
    pub fn from_chain(chain: DegradationChain, config: EmbeddingConfig) -> Self {
        let cache = L1MemoryCache::new(config.l1_cache_size);
        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            chain_len = chain.len(),
            "EmbeddingEngine initialized"
        );
        Self {
            chain,
            cache,
            config,
        }
    }

    /// Embed a batch so that every vector lives in the same space.
    ///
    /// Served from cache only when every text hits. Otherwise the whole batch
    /// goes through the chain, and results are cached only if the primary
    /// provider produced them.
    pub fn embed_batch_reporting(&self, texts: &[String]) -> ScholarResult<EmbeddedBatch> {
        let cached: Option<Vec<Vec<f32>>> = texts.iter().map(|t| self.cache.get(t)).collect();
        if let Some(vectors) = cached {
            debug!(count = texts.len(), "embedding batch served from L1 cache");
            return Ok(EmbeddedBatch {
                vectors,
                provider: self.chain.active_provider_name().to_string(),
                degradation: Vec::new(),
            });
        }

        let out = self.chain.embed_batch(texts)?;
        if out.position == 0 {
            for (text, vector) in texts.iter().zip(&out.vectors) {
                self.cache.insert(text, vector.clone());
            }
        }
        Ok(EmbeddedBatch {
            vectors: out.vectors,
            provider: out.provider,
            degradation: out.degradation,
        })
    }

    /// Name of the provider the engine tries first.
    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    pub fn cache(&self) -> &L1MemoryCache {
        &self.cache
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> ScholarResult<Vec<f32>> {
        let mut batch = self.embed_batch_reporting(&[text.to_string()])?;
        Ok(batch.vectors.pop().unwrap_or_else(|| vec![0.0; self.config.dimensions]))
    }

    fn embed_batch(&self, texts: &[String]) -> ScholarResult<Vec<Vec<f32>>> {
        Ok(self.embed_batch_reporting(texts)?.vectors)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        "scholar-embedding-engine"
    }

    fn is_available(&self) -> bool {
        !self.chain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashed_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(EmbeddingConfig {
            provider: "hashed".to_string(),
            dimensions: 128,
            ..Default::default()
        })
    }

    #[test]
    fn hashed_only_engine_reports_hashed_provider() {
        let engine = hashed_engine();
        assert_eq!(engine.active_provider(), "hashed-tf");
        assert_eq!(engine.dimensions(), 128);
    }

    #[test]
    fn onnx_without_model_uses_hashed() {
        let engine = EmbeddingEngine::new(EmbeddingConfig::default());
        assert_eq!(engine.active_provider(), "hashed-tf");
    }

    #[test]
    fn batch_vectors_have_configured_dims() {
        let engine = hashed_engine();
        let texts = vec!["surface codes".to_string(), "bosonic codes".to_string()];
        let batch = engine.embed_batch_reporting(&texts).unwrap();
        assert_eq!(batch.vectors.len(), 2);
        assert!(batch.vectors.iter().all(|v| v.len() == 128));
        assert!(batch.degradation.is_empty());
    }

    #[test]
    fn repeated_batch_is_stable() {
        let engine = hashed_engine();
        let texts = vec!["logical qubits".to_string()];
        let a = engine.embed_batch_reporting(&texts).unwrap();
        let b = engine.embed_batch_reporting(&texts).unwrap();
        assert_eq!(a.vectors, b.vectors);
    }

    #[test]
    fn trait_impl_matches_batch() {
        let engine = hashed_engine();
        let provider: &dyn IEmbeddingProvider = &engine;
        assert!(provider.is_available());
        let single = provider.embed("threshold theorem").unwrap();
        let batch = provider.embed_batch(&["threshold theorem".to_string()]).unwrap();
        assert_eq!(single, batch[0]);
    }
}
