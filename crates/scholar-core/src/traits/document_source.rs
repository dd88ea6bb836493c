use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::RawDocument;

/// A searchable upstream document index.
///
/// Implementations do one request per call: no retries, no caching. Timeouts
/// are applied by the caller.
#[async_trait]
pub trait IDocumentSource: Send + Sync {
    /// Search for up to `limit` documents matching `query`.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawDocument>, SourceError>;

    /// Name used in logs and error messages.
    fn name(&self) -> &str;
}
