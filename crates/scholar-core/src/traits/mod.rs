mod abstractive;
mod document_source;
mod embedding;

pub use abstractive::IAbstractiveSummarizer;
pub use document_source::IDocumentSource;
pub use embedding::IEmbeddingProvider;
