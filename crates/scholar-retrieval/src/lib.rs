//! # scholar-retrieval
//!
//! Orders candidate documents by relevance to the query.
//!
//! The embedding ranker scores `max(0, cosine)` between query and document
//! vectors. When the embedding backend errors or produces degenerate
//! vectors, ranking falls back to TF-IDF cosine over the candidate corpus.
//! Either way the result is a [`RankedSet`](scholar_core::RankedSet).

pub mod ranking;

pub use ranking::{EmbeddingRanker, LexicalRanker, Ranker, RankingOutcome, RankingService};
