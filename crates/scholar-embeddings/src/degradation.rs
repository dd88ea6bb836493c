//! Fallback chain for embedding generation.
//!
//! Providers are tried in order. A provider that errors, or returns vectors
//! of the wrong dimensionality, hands over to the next one and the hand-over
//! is reported as a [`DegradationEvent`].

use scholar_core::constants::components;
use scholar_core::errors::{EmbeddingError, ScholarResult};
use scholar_core::models::DegradationEvent;
use scholar_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Vectors from one chain call, with the provider that produced them.
#[derive(Debug, Clone)]
pub struct ChainOutput {
    pub vectors: Vec<Vec<f32>>,
    pub provider: String,
    /// Index of `provider` in the chain. Zero means no fallback happened.
    pub position: usize,
    pub degradation: Vec<DegradationEvent>,
}

/// Ordered list of embedding providers.
pub struct DegradationChain {
    chain: Vec<Box<dyn IEmbeddingProvider>>,
    dimensions: usize,
}

impl DegradationChain {
    /// Create an empty chain expecting vectors of `dimensions` length.
    pub fn new(dimensions: usize) -> Self {
        Self {
            chain: Vec::new(),
            dimensions,
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.chain.push(provider);
    }

    /// Embed a batch with the first provider that succeeds.
    ///
    /// All vectors of one call come from the same provider.
    pub fn embed_batch(&self, texts: &[String]) -> ScholarResult<ChainOutput> {
        let mut degradation = Vec::new();
        let mut last_error = None;

        for (position, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }

            let attempt = provider.embed_batch(texts).and_then(|vectors| {
                match vectors.iter().find(|v| v.len() != self.dimensions) {
                    Some(bad) => Err(EmbeddingError::DimensionMismatch {
                        expected: self.dimensions,
                        actual: bad.len(),
                    }
                    .into()),
                    None => Ok(vectors),
                }
            });

            match attempt {
                Ok(vectors) => {
                    if position > 0 {
                        let failed = self.primary_name();
                        degradation.push(DegradationEvent::now(
                            components::EMBEDDINGS,
                            format!("{failed} unavailable"),
                            provider.name(),
                        ));
                    }
                    return Ok(ChainOutput {
                        vectors,
                        provider: provider.name().to_string(),
                        position,
                        degradation,
                    });
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embedding provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: "all providers exhausted".to_string(),
            }
            .into()
        }))
    }

    fn primary_name(&self) -> &str {
        self.chain.first().map(|p| p.name()).unwrap_or("unknown")
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
