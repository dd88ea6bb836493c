/// Summarization subsystem errors. All are absorbed by the engine,
/// which degrades to extractive-only output.
#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("abstractive summarizer unavailable: {name}")]
    AbstractiveUnavailable { name: String },

    #[error("abstractive generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("generated sentence is not traceable to any extract: {sentence}")]
    Untraceable { sentence: String },
}
