use crate::models::PipelineState;

use super::{EmbeddingError, SourceError, SummarizationError};

/// Top-level error for the Scholar pipeline.
///
/// Only `InvalidQuery`, `NoDataAvailable` and `Timeout` are expected to reach
/// a caller; component errors are absorbed into degraded-mode results.
#[derive(Debug, thiserror::Error)]
pub enum ScholarError {
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("no data available: {detail}")]
    NoDataAvailable { detail: String },

    #[error("time budget of {budget_ms}ms exceeded during {stage}")]
    Timeout { budget_ms: u64, stage: PipelineState },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Summarization(#[from] SummarizationError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}
