//! ONNX Runtime embedding provider.
//!
//! Loads a sentence-embedding model via `ort` (v2), mean-pools the last
//! hidden state and L2-normalizes.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use scholar_core::errors::{EmbeddingError, ScholarResult};
use scholar_core::similarity::l2_normalize;
use scholar_core::traits::IEmbeddingProvider;
use tracing::debug;

const CLS: u32 = 101;
const SEP: u32 = 102;
const VOCAB: u32 = 29_999;
const MAX_TOKENS: usize = 256;

/// Embedding provider backed by an ONNX model file.
pub struct OnnxProvider {
    // `run` takes `&mut Session`.
    session: Mutex<Session>,
    dimensions: usize,
    name: String,
}

impl OnnxProvider {
    /// Load an ONNX model from `model_path`.
    ///
    /// # Errors
    /// `EmbeddingError::ModelLoadFailed` if the file is missing or the
    /// runtime rejects it.
    pub fn load(model_path: &str, dimensions: usize) -> ScholarResult<Self> {
        let path = Path::new(model_path);
        let load_failed = |reason: String| EmbeddingError::ModelLoadFailed {
            path: model_path.to_string(),
            reason,
        };
        if !path.exists() {
            return Err(load_failed("model file not found".to_string()).into());
        }

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("model");

        debug!(model = stem, dims = dimensions, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            name: format!("onnx:{stem}"),
        })
    }

    fn infer(&self, text: &str) -> ScholarResult<Vec<f32>> {
        let failed = |reason: String| EmbeddingError::InferenceFailed { reason };

        let input_ids: Vec<i64> = tokenize(text).into_iter().map(i64::from).collect();
        let seq_len = input_ids.len();
        let attention_mask = vec![1i64; seq_len];

        let ids_tensor = Tensor::from_array((vec![1i64, seq_len as i64], input_ids))
            .map_err(|e| failed(format!("tensor creation error: {e}")))?;
        let mask_tensor = Tensor::from_array((vec![1i64, seq_len as i64], attention_mask))
            .map_err(|e| failed(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| failed(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| failed(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| failed("no output tensor".to_string()))?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| failed(format!("tensor extraction failed: {e}")))?;

        let mut embedding = match shape.len() {
            // [batch=1, seq, dims]
            3 => {
                let seq = shape[1] as usize;
                let dims = shape[2] as usize;
                let mut pooled = vec![0.0f32; dims];
                for s in 0..seq {
                    for (d, slot) in pooled.iter_mut().enumerate() {
                        *slot += data[s * dims + d];
                    }
                }
                if seq > 0 {
                    for v in &mut pooled {
                        *v /= seq as f32;
                    }
                }
                pooled
            }
            // [batch=1, dims], already pooled
            2 => {
                let dims = shape[1] as usize;
                data[..dims].to_vec()
            }
            _ => {
                return Err(failed(format!("unexpected output shape: {shape:?}")).into());
            }
        };

        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        l2_normalize(&mut embedding);
        Ok(embedding)
    }
}

/// Word-level hashing tokenizer wrapped in `[CLS]` / `[SEP]`.
fn tokenize(text: &str) -> Vec<u32> {
    let mut ids = vec![CLS];
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .take(MAX_TOKENS - 2)
    {
        let mut h: u32 = 0x811c9dc5;
        for b in word.to_lowercase().as_bytes() {
            h ^= u32::from(*b);
            h = h.wrapping_mul(0x01000193);
        }
        ids.push(1 + (h % VOCAB));
    }
    ids.push(SEP);
    ids
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> ScholarResult<Vec<f32>> {
        self.infer(text)
    }

    fn embed_batch(&self, texts: &[String]) -> ScholarResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}
