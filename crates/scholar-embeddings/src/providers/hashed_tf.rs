//! Hashed term-frequency provider.
//!
//! Buckets content terms into a fixed-dimension vector with FNV-1a and
//! weights them by frequency. No model, no I/O, always available.

use std::collections::BTreeMap;

use scholar_core::errors::ScholarResult;
use scholar_core::similarity::l2_normalize;
use scholar_core::text::content_terms;
use scholar_core::traits::IEmbeddingProvider;

pub const HASHED_TF_NAME: &str = "hashed-tf";

/// Deterministic dense vectors from hashed term frequencies.
///
/// Text with no content terms (empty, or only stopwords) embeds to the zero
/// vector, which ranking treats as degenerate.
pub struct HashedTfProvider {
    dimensions: usize,
}

impl HashedTfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let terms = content_terms(text);
        if terms.is_empty() || self.dimensions == 0 {
            return vec;
        }

        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for term in &terms {
            *tf.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in &tf {
            // Longer terms are usually more specific.
            let weight = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * weight;
        }

        l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for HashedTfProvider {
    fn embed(&self, text: &str) -> ScholarResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> ScholarResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        HASHED_TF_NAME
    }

    fn is_available(&self) -> bool {
        true
    }
}
