//! Provider registry.
//!
//! The configured primary provider (if any) goes first in the chain;
//! [`HashedTfProvider`] is always appended as the last resort.

pub mod hashed_tf;
pub mod onnx_provider;

pub use hashed_tf::HashedTfProvider;
pub use onnx_provider::OnnxProvider;

use scholar_core::config::EmbeddingConfig;
use scholar_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Create the configured primary provider.
///
/// Returns `None` when the configured provider is the hashed fallback itself
/// or cannot be loaded.
pub fn create_primary(config: &EmbeddingConfig) -> Option<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "onnx" => {
            let Some(path) = config.model_path.as_deref() else {
                warn!("onnx provider configured without model_path, using hashed-tf");
                return None;
            };
            match OnnxProvider::load(path, config.dimensions) {
                Ok(p) => {
                    info!(provider = p.name(), "embedding provider loaded");
                    Some(Box::new(p))
                }
                Err(e) => {
                    warn!(error = %e, "onnx provider failed to load, using hashed-tf");
                    None
                }
            }
        }
        "hashed" | "hashed-tf" => None,
        other => {
            warn!(provider = other, "unknown embedding provider, using hashed-tf");
            None
        }
    }
}
