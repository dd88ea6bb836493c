use crate::errors::SummarizationError;
use crate::models::{Document, ExtractedSentence};

/// Rewrites extracted sentences into one fluent paragraph.
///
/// `extracts` arrive grouped by document, documents in contribution order.
/// `cited` lists those documents in the same order; citation `[n]` refers to
/// `cited[n - 1]`. Output sentences must stay traceable to the extracts.
pub trait IAbstractiveSummarizer: Send + Sync {
    fn summarize(
        &self,
        query: &str,
        extracts: &[ExtractedSentence],
        cited: &[Document],
    ) -> Result<String, SummarizationError>;

    fn name(&self) -> &str;

    fn is_available(&self) -> bool {
        true
    }
}
