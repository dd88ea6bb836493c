//! # scholar-embeddings
//!
//! Text → fixed-length vectors for ranking and coherence scoring.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── DegradationChain (provider fallback)
//! │   ├── OnnxProvider (when a model is configured)
//! │   └── HashedTfProvider (always available)
//! └── L1MemoryCache (moka, primary-provider vectors only)
//! ```
//!
//! The engine takes `&self` everywhere: degradation is reported per call,
//! so one engine is shared by all concurrent requests.

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;

pub use cache::L1MemoryCache;
pub use degradation::{ChainOutput, DegradationChain};
pub use engine::{EmbeddedBatch, EmbeddingEngine};
pub use providers::{HashedTfProvider, OnnxProvider};
