//! # scholar-summarization
//!
//! Multi-document summarization in two phases.
//!
//! 1. **Extractive**: salient sentences per document (position, term
//!    frequency, query overlap).
//! 2. **Abstractive**: an `IAbstractiveSummarizer` recombines the extracts
//!    into one paragraph with `[n]` citation markers. Output that is not
//!    traceable to the extracts is discarded.
//!
//! Any abstractive trouble degrades to the extractive text.

pub mod engine;
pub mod extractive;
pub mod fusion;
pub mod traceability;

pub use engine::{SummarizationEngine, SummarizationOutcome};
pub use extractive::ExtractiveSelector;
pub use fusion::SentenceFusion;
