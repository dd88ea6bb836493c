mod embedding_error;
mod scholar_error;
mod source_error;
mod summarization_error;

pub use embedding_error::EmbeddingError;
pub use scholar_error::ScholarError;
pub use source_error::SourceError;
pub use summarization_error::SummarizationError;

use serde::{Deserialize, Serialize};

/// Convenience alias used throughout the workspace.
pub type ScholarResult<T> = Result<T, ScholarError>;

/// Stable, caller-visible error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidQuery,
    NoDataAvailable,
    Timeout,
    InternalError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidQuery => "InvalidQuery",
            Self::NoDataAvailable => "NoDataAvailable",
            Self::Timeout => "Timeout",
            Self::InternalError => "InternalError",
        }
    }

    /// HTTP status a web layer should answer with.
    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidQuery => 400,
            Self::NoDataAvailable => 503,
            Self::Timeout => 504,
            Self::InternalError => 500,
        }
    }

    /// Whether the same request may succeed later.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::NoDataAvailable | Self::Timeout)
    }
}

impl ScholarError {
    /// Classify this error into its caller-visible kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidQuery { .. } => ErrorKind::InvalidQuery,
            Self::NoDataAvailable { .. } => ErrorKind::NoDataAvailable,
            Self::Source(SourceError::Unavailable { .. }) => ErrorKind::NoDataAvailable,
            Self::Timeout { .. } => ErrorKind::Timeout,
            _ => ErrorKind::InternalError,
        }
    }
}
